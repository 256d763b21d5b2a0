//! DCMI Metadata Terms.

use super::literal_set;
use crate::codec::XmlRoot;
use crate::codec::namespace::{self, QualifiedName};

literal_set! {
    /// Every property of the `dcterms` namespace, each repeatable.
    ///
    /// Opencast stores episode and series catalogs in this shape under an
    /// `<dublincore>` root; other roots are accepted on input.
    pub struct Terms {
        r#abstract => "dcterms:abstract" as "abstract",
        access_rights => "dcterms:accessRights" as "accessRights",
        accrual_method => "dcterms:accrualMethod" as "accrualMethod",
        accrual_periodicity => "dcterms:accrualPeriodicity" as "accrualPeriodicity",
        accrual_policy => "dcterms:accrualPolicy" as "accrualPolicy",
        alternative => "dcterms:alternative" as "alternative",
        audience => "dcterms:audience" as "audience",
        available => "dcterms:available" as "available",
        bibliographic_citation => "dcterms:bibliographicCitation" as "bibliographicCitation",
        conforms_to => "dcterms:conformsTo" as "conformsTo",
        contributor => "dcterms:contributor" as "contributor",
        coverage => "dcterms:coverage" as "coverage",
        created => "dcterms:created" as "created",
        creator => "dcterms:creator" as "creator",
        date => "dcterms:date" as "date",
        date_accepted => "dcterms:dateAccepted" as "dateAccepted",
        date_copyrighted => "dcterms:dateCopyrighted" as "dateCopyrighted",
        date_submitted => "dcterms:dateSubmitted" as "dateSubmitted",
        description => "dcterms:description" as "description",
        education_level => "dcterms:educationLevel" as "educationLevel",
        extent => "dcterms:extent" as "extent",
        format => "dcterms:format" as "format",
        has_format => "dcterms:hasFormat" as "hasFormat",
        has_part => "dcterms:hasPart" as "hasPart",
        has_version => "dcterms:hasVersion" as "hasVersion",
        identifier => "dcterms:identifier" as "identifier",
        instructional_method => "dcterms:instructionalMethod" as "instructionalMethod",
        is_format_of => "dcterms:isFormatOf" as "isFormatOf",
        is_part_of => "dcterms:isPartOf" as "isPartOf",
        is_referenced_by => "dcterms:isReferencedBy" as "isReferencedBy",
        is_replaced_by => "dcterms:isReplacedBy" as "isReplacedBy",
        is_required_by => "dcterms:isRequiredBy" as "isRequiredBy",
        issued => "dcterms:issued" as "issued",
        is_version_of => "dcterms:isVersionOf" as "isVersionOf",
        language => "dcterms:language" as "language",
        license => "dcterms:license" as "license",
        mediator => "dcterms:mediator" as "mediator",
        medium => "dcterms:medium" as "medium",
        modified => "dcterms:modified" as "modified",
        provenance => "dcterms:provenance" as "provenance",
        publisher => "dcterms:publisher" as "publisher",
        references => "dcterms:references" as "references",
        relation => "dcterms:relation" as "relation",
        replaces => "dcterms:replaces" as "replaces",
        requires => "dcterms:requires" as "requires",
        rights => "dcterms:rights" as "rights",
        rights_holder => "dcterms:rightsHolder" as "rightsHolder",
        source => "dcterms:source" as "source",
        spatial => "dcterms:spatial" as "spatial",
        subject => "dcterms:subject" as "subject",
        table_of_contents => "dcterms:tableOfContents" as "tableOfContents",
        temporal => "dcterms:temporal" as "temporal",
        title => "dcterms:title" as "title",
        kind => "dcterms:type" as "type",
        valid => "dcterms:valid" as "valid",
    }
}

impl XmlRoot for Terms {
    const NAMESPACE: &'static str = namespace::OPENCAST_DC;
    const LOCAL_NAME: &'static str = "dublincore";

    fn accepts_root(_name: &QualifiedName) -> bool {
        true
    }
}

impl Terms {
    /// First value of a property, ignoring language variants.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)?.first().map(|literal| literal.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dc::SimpleLiteral;

    #[test]
    fn test_all_terms_are_declared() {
        assert_eq!(Terms::KEYS.len(), 55);
        assert!(Terms::KEYS.contains(&"dcterms:rightsHolder"));
    }

    #[test]
    fn test_first_value() {
        let terms = Terms {
            created: vec![SimpleLiteral::new("2024-05-01T10:00:00Z")],
            ..Terms::default()
        };
        assert_eq!(terms.first("dcterms:created"), Some("2024-05-01T10:00:00Z"));
        assert_eq!(terms.first("dcterms:title"), None);
    }
}
