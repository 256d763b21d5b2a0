//! Descriptive metadata: titles, people and organisations, subjects, dates,
//! relations, rights, publication history and parts.

use serde::{Deserialize, Serialize};

use super::attributes::{DateAttributes, FormatAttributes, StatusAttributes, TypeAttributes};
use super::format::{Format, MediaDuration, MediaTime, Typed};
use crate::dc::SimpleLiteral;
use crate::scalar::{Date, Time};

/// Free text with an optional language and classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    #[serde(rename = "#value", default)]
    pub value: String,
    #[serde(rename = "@xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// CORE METADATA
// ============================================================================

/// Declare a struct carrying every `coreMetadataType` child after its own
/// leading fields. `partType` extends `coreMetadataType`, so both are
/// generated from this one list.
macro_rules! core_metadata {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$field_meta:meta])* pub $field:ident : $ty:ty,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $($(#[$field_meta])* pub $field: $ty,)*

            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub title: Vec<Title>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub alternative_title: Vec<AlternativeTitle>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub creator: Vec<Entity>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub subject: Vec<Subject>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub description: Vec<Description>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub publisher: Vec<Entity>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub contributor: Vec<Entity>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub date: Vec<Dates>,
            #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
            pub kind: Vec<Classification>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub format: Vec<Format>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub identifier: Vec<Identifier>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub source: Vec<Text>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub language: Vec<Language>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub relation: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_version_of: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub has_version: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_replaced_by: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub replaces: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_required_by: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub requires: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_part_of: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub has_part: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_referenced_by: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub references: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_format_of: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub has_format: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_episode_of: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_season_of: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub has_episode: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub has_season: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub is_member_of: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub has_member: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub same_as: Vec<Relation>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub coverage: Vec<Coverage>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub rights: Vec<Rights>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub version: Vec<Text>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub publication_history: Vec<PublicationHistory>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub rating: Vec<Rating>,
            #[serde(default, skip_serializing_if = "Vec::is_empty")]
            pub part: Vec<Part>,
        }

        impl $name {
            /// First `dc:title` text of the first title, if any.
            pub fn main_title(&self) -> Option<&str> {
                self.title
                    .first()
                    .and_then(|t| t.titles.first())
                    .map(|l| l.value.as_str())
            }

            /// Every relation list paired with its element name.
            pub fn relations(&self) -> [(&'static str, &[Relation]); 20] {
                [
                    ("relation", self.relation.as_slice()),
                    ("isVersionOf", self.is_version_of.as_slice()),
                    ("hasVersion", self.has_version.as_slice()),
                    ("isReplacedBy", self.is_replaced_by.as_slice()),
                    ("replaces", self.replaces.as_slice()),
                    ("isRequiredBy", self.is_required_by.as_slice()),
                    ("requires", self.requires.as_slice()),
                    ("isPartOf", self.is_part_of.as_slice()),
                    ("hasPart", self.has_part.as_slice()),
                    ("isReferencedBy", self.is_referenced_by.as_slice()),
                    ("references", self.references.as_slice()),
                    ("isFormatOf", self.is_format_of.as_slice()),
                    ("hasFormat", self.has_format.as_slice()),
                    ("isEpisodeOf", self.is_episode_of.as_slice()),
                    ("isSeasonOf", self.is_season_of.as_slice()),
                    ("hasEpisode", self.has_episode.as_slice()),
                    ("hasSeason", self.has_season.as_slice()),
                    ("isMemberOf", self.is_member_of.as_slice()),
                    ("hasMember", self.has_member.as_slice()),
                    ("sameAs", self.same_as.as_slice()),
                ]
            }
        }
    };
}

core_metadata! {
    /// `coreMetadataType`: the descriptive body of an EBUCore document.
    pub struct CoreMetadata {}
}

core_metadata! {
    /// `partType`: a time-bounded segment of the asset that carries its own
    /// descriptive metadata.
    ///
    /// `partDuration` and `partEndTime` are independent; either, both or
    /// neither may be present and no consistency check is made between them.
    pub struct Part {
        #[serde(rename = "@partId", default, skip_serializing_if = "Option::is_none")]
        pub part_id: Option<String>,
        #[serde(rename = "@partName", default, skip_serializing_if = "Option::is_none")]
        pub part_name: Option<String>,
        #[serde(rename = "@partDefinition", default, skip_serializing_if = "Option::is_none")]
        pub part_definition: Option<String>,
        #[serde(flatten)]
        pub part_kind: TypeAttributes,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub part_number: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub part_total_number: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub part_start_time: Option<MediaTime>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub part_duration: Option<MediaDuration>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub part_end_time: Option<MediaTime>,
    }
}

// ============================================================================
// TITLES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    #[serde(rename = "@attributiondate", default, skip_serializing_if = "Option::is_none")]
    pub attribution_date: Option<Date>,
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(flatten)]
    pub status: StatusAttributes,
    #[serde(flatten)]
    pub dates: DateAttributes,
    #[serde(rename = "dc:title", default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<SimpleLiteral>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            titles: vec![SimpleLiteral::new(text)],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeTitle {
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(flatten)]
    pub status: StatusAttributes,
    #[serde(flatten)]
    pub dates: DateAttributes,
    #[serde(rename = "dc:title", default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<SimpleLiteral>,
}

// ============================================================================
// ENTITIES
// ============================================================================

/// `entityType`: a person, an organisation, or both, in some role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(rename = "@entityId", default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_details: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organisation_details: Vec<Organisation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<Typed>,
}

impl Entity {
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            contact_details: vec![Contact {
                name: vec![Text::new(name)],
                ..Contact::default()
            }],
            ..Self::default()
        }
    }

    pub fn organisation(name: impl Into<String>) -> Self {
        Self {
            organisation_details: vec![Organisation {
                organisation_name: vec![Text::new(name)],
                ..Organisation::default()
            }],
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role.push(Typed::label(role));
        self
    }

    /// Display name: the contact's name, else the organisation's.
    pub fn display_name(&self) -> Option<String> {
        if let Some(contact) = self.contact_details.first() {
            if let Some(name) = contact.full_name() {
                return Some(name);
            }
        }
        self.organisation_details
            .first()
            .and_then(|o| o.organisation_name.first())
            .map(|n| n.value.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "@contactId", default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_given_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occupation: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Details>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stage_name: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_information_link: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_contacts: Vec<Entity>,
}

impl Contact {
    /// `name` when given, else the given and family names joined.
    pub fn full_name(&self) -> Option<String> {
        if let Some(name) = self.name.first() {
            return Some(name.value.clone());
        }
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => Some(format!("{given} {family}")),
            (Some(one), None) | (None, Some(one)) => Some(one.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    #[serde(rename = "@organisationId", default, skip_serializing_if = "Option::is_none")]
    pub organisation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organisation_name: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organisation_code: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organisation_department: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Details>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Entity>,
}

/// `detailsType`: how to reach a contact or organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_address: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_address: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telephone_number: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mobile_telephone_number: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_line: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_town_city: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_county_state: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_delivery_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Typed>,
}

// ============================================================================
// SUBJECT, DESCRIPTION, TYPE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "dc:subject", default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<SimpleLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_definition: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributor: Option<Entity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "@length", default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "dc:description", default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<SimpleLiteral>,
}

/// `typeType`: genre, object type and audience classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "dc:type", default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<SimpleLiteral>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_type: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_audience: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audience_level: Vec<Typed>,
}

// ============================================================================
// DATES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedEvent {
    #[serde(flatten)]
    pub dates: DateAttributes,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

/// `dateType`: lifecycle dates of the asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dates {
    #[serde(rename = "dc:date", default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<SimpleLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DatedEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DatedEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<DatedEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<DatedEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyrighted: Option<DatedEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digitised: Option<DatedEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative: Vec<DatedEvent>,
}

// ============================================================================
// IDENTIFIER, LANGUAGE, RELATION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(flatten)]
    pub format: FormatAttributes,
    #[serde(rename = "dc:identifier", default)]
    pub identifier: SimpleLiteral,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributor: Option<Entity>,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            identifier: SimpleLiteral::new(value),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "dc:language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<SimpleLiteral>,
}

/// `relationType`: a link to another resource by one of three means.
///
/// The schema requires exactly one of `dc:relation`, `relationIdentifier` and
/// `relationLink`; [`Relation::target`] exposes whichever comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(rename = "@runningOrderNumber", default, skip_serializing_if = "Option::is_none")]
    pub running_order_number: Option<u32>,
    #[serde(rename = "@totalNumberOfGroupMembers", default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_group_members: Option<u32>,
    #[serde(rename = "@orderedGroupFlag", default, skip_serializing_if = "Option::is_none")]
    pub ordered_group_flag: Option<bool>,
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "dc:relation", default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<SimpleLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_identifier: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationTarget<'a> {
    Literal(&'a SimpleLiteral),
    Identifier(&'a Identifier),
    Link(&'a str),
}

impl Relation {
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            relation_link: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn target(&self) -> Option<RelationTarget<'_>> {
        if let Some(literal) = &self.relation {
            return Some(RelationTarget::Literal(literal));
        }
        if let Some(identifier) = &self.relation_identifier {
            return Some(RelationTarget::Identifier(identifier));
        }
        self.relation_link.as_deref().map(RelationTarget::Link)
    }
}

// ============================================================================
// COVERAGE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodOfTime {
    #[serde(rename = "@periodId", default, skip_serializing_if = "Option::is_none")]
    pub period_id: Option<String>,
    #[serde(flatten)]
    pub dates: DateAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temporal {
    #[serde(rename = "@periodId", default, skip_serializing_if = "Option::is_none")]
    pub period_id: Option<String>,
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "PeriodOfTime", default, skip_serializing_if = "Vec::is_empty")]
    pub periods: Vec<PeriodOfTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(flatten)]
    pub format: FormatAttributes,
    #[serde(default)]
    pub posx: f64,
    #[serde(default)]
    pub posy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country_region: Vec<Typed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "@locationId", default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spatial {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    #[serde(rename = "dc:coverage", default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<SimpleLiteral>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temporal: Vec<Temporal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spatial: Vec<Spatial>,
}

// ============================================================================
// RIGHTS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rights {
    #[serde(rename = "@formatIDRefs", default, skip_serializing_if = "Option::is_none")]
    pub format_id_refs: Option<String>,
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "dc:rights", default, skip_serializing_if = "Option::is_none")]
    pub rights: Option<SimpleLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rights_link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rights_holder: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exploitation_issues: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copyright_statement: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage: Vec<Coverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rights_clearance_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disclaimer: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rights_id: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_details: Vec<Contact>,
}

// ============================================================================
// PUBLICATION HISTORY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationChannel {
    #[serde(rename = "@publicationChannelId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "#value", default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationEvent {
    #[serde(rename = "@publicationEventId", default, skip_serializing_if = "Option::is_none")]
    pub publication_event_id: Option<String>,
    #[serde(rename = "@publicationEventName", default, skip_serializing_if = "Option::is_none")]
    pub publication_event_name: Option<String>,
    #[serde(rename = "@firstShowing", default, skip_serializing_if = "Option::is_none")]
    pub first_showing: Option<bool>,
    #[serde(rename = "@lastShowing", default, skip_serializing_if = "Option::is_none")]
    pub last_showing: Option<bool>,
    #[serde(rename = "@live", default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
    #[serde(rename = "@free", default, skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
    #[serde(rename = "@note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "@formatIdRef", default, skip_serializing_if = "Option::is_none")]
    pub format_id_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_time: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_service: Option<Typed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_medium: Option<Typed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_channel: Option<PublicationChannel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publication_region: Vec<Region>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationHistory {
    #[serde(rename = "@publicationHistoryId", default, skip_serializing_if = "Option::is_none")]
    pub publication_history_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publication_event: Vec<PublicationEvent>,
}

impl PublicationHistory {
    pub fn first_showing(&self) -> Option<&PublicationEvent> {
        self.publication_event
            .iter()
            .find(|e| e.first_showing == Some(true))
    }
}

// ============================================================================
// RATING
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "@reason", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename = "@linkToLogo", default, skip_serializing_if = "Option::is_none")]
    pub link_to_logo: Option<String>,
    #[serde(rename = "@notRated", default, skip_serializing_if = "Option::is_none")]
    pub not_rated: Option<bool>,
    #[serde(rename = "@adultContent", default, skip_serializing_if = "Option::is_none")]
    pub adult_content: Option<bool>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(flatten)]
    pub format: FormatAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_value: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_scale_max_value: Vec<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_scale_min_value: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_provider: Option<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_region: Vec<Region>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_json_form() {
        let mut title = Title::new("Tears of Steel");
        title.kind = TypeAttributes::label("main");
        assert_eq!(
            serde_json::to_value(&title).unwrap(),
            json!({ "@typeLabel": "main", "dc:title": [{ "#value": "Tears of Steel" }] })
        );
    }

    #[test]
    fn test_main_title() {
        let core = CoreMetadata {
            title: vec![Title::new("Sintel"), Title::new("Other")],
            ..CoreMetadata::default()
        };
        assert_eq!(core.main_title(), Some("Sintel"));
        assert_eq!(CoreMetadata::default().main_title(), None);
    }

    #[test]
    fn test_entity_names() {
        assert_eq!(Entity::person("Ian Hubert").display_name().as_deref(), Some("Ian Hubert"));
        assert_eq!(
            Entity::organisation("Blender Foundation").display_name().as_deref(),
            Some("Blender Foundation")
        );

        let split = Entity {
            contact_details: vec![Contact {
                given_name: Some("Ton".into()),
                family_name: Some("Roosendaal".into()),
                ..Contact::default()
            }],
            ..Entity::default()
        };
        assert_eq!(split.display_name().as_deref(), Some("Ton Roosendaal"));
        assert_eq!(Entity::default().display_name(), None);
    }

    #[test]
    fn test_relation_target_order() {
        let mut relation = Relation::link("https://mango.blender.org");
        assert_eq!(relation.target(), Some(RelationTarget::Link("https://mango.blender.org")));

        relation.relation_identifier = Some(Identifier::new("urn:uuid:1"));
        assert!(matches!(relation.target(), Some(RelationTarget::Identifier(_))));
        assert_eq!(Relation::default().target(), None);
    }

    #[test]
    fn test_part_allows_duration_and_end_time_together() {
        let part = Part {
            part_id: Some("p1".into()),
            part_duration: Some(MediaDuration {
                timecode: Some("00:00:10:00".into()),
                ..MediaDuration::default()
            }),
            part_end_time: Some(MediaTime {
                timecode: Some("00:00:20:00".into()),
                ..MediaTime::default()
            }),
            title: vec![Title::new("Opening")],
            ..Part::default()
        };
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["@partId"], "p1");
        assert_eq!(value["partDuration"]["timecode"], "00:00:10:00");
        assert_eq!(value["partEndTime"]["timecode"], "00:00:20:00");
        assert_eq!(serde_json::from_value::<Part>(value).unwrap(), part);
        assert_eq!(part.main_title(), Some("Opening"));
    }

    #[test]
    fn test_nested_parts() {
        let core = CoreMetadata {
            part: vec![Part {
                part: vec![Part {
                    part_number: Some(2),
                    ..Part::default()
                }],
                ..Part::default()
            }],
            ..CoreMetadata::default()
        };
        let value = serde_json::to_value(&core).unwrap();
        assert_eq!(value["part"][0]["part"][0]["partNumber"], 2);
    }
}
