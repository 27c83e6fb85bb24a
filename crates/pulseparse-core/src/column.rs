//! Declared column types.
//!
//! The board API tags every column value with a type string. [`ColumnType`]
//! resolves that tag once, so the parser and selector match on variants
//! instead of comparing strings.

use std::fmt;

/// Color used when a color-bearing column does not carry its own.
pub const DEFAULT_COLOR: &str = "#00c875";

/// A declared column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    CreationLog,
    Status,
    Checkbox,
    LongText,
    Link,
    Date,
    Timeline,
    People,
    Dropdown,
    Tags,
    Email,
    Phone,
    File,
    BoardRelation,
    Dependency,
    Mirror,
    Location,
    Country,
    Rating,
    Vote,
    Hour,
    Week,
    WorldClock,
    TimeTracking,
    Formula,
    Button,
    LastUpdated,
    ItemId,
    Doc,
    Text,
    Numbers,
    /// `color` or any compound tag containing it (e.g. `color_picker`).
    Color(String),
    /// Unrecognized tag; values pass through unchanged.
    Other(String),
}

/// Exact tags and the types they resolve to.
const KNOWN_TYPES: &[(&str, ColumnType)] = &[
    ("creation_log", ColumnType::CreationLog),
    ("status", ColumnType::Status),
    ("checkbox", ColumnType::Checkbox),
    ("long_text", ColumnType::LongText),
    ("link", ColumnType::Link),
    ("date", ColumnType::Date),
    ("timeline", ColumnType::Timeline),
    ("people", ColumnType::People),
    ("dropdown", ColumnType::Dropdown),
    ("tags", ColumnType::Tags),
    ("email", ColumnType::Email),
    ("phone", ColumnType::Phone),
    ("file", ColumnType::File),
    ("board_relation", ColumnType::BoardRelation),
    ("dependency", ColumnType::Dependency),
    ("mirror", ColumnType::Mirror),
    ("location", ColumnType::Location),
    ("country", ColumnType::Country),
    ("rating", ColumnType::Rating),
    ("vote", ColumnType::Vote),
    ("hour", ColumnType::Hour),
    ("week", ColumnType::Week),
    ("world_clock", ColumnType::WorldClock),
    ("time_tracking", ColumnType::TimeTracking),
    ("formula", ColumnType::Formula),
    ("button", ColumnType::Button),
    ("last_updated", ColumnType::LastUpdated),
    ("item_id", ColumnType::ItemId),
    ("doc", ColumnType::Doc),
    ("text", ColumnType::Text),
    ("numbers", ColumnType::Numbers),
];

impl ColumnType {
    /// Resolve a declared type tag.
    ///
    /// Exact tags are checked before the `color` substring rule.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if let Some((_, kind)) = KNOWN_TYPES.iter().find(|(t, _)| *t == tag) {
            return kind.clone();
        }
        if tag.contains("color") {
            Self::Color(tag.to_string())
        } else {
            Self::Other(tag.to_string())
        }
    }

    /// All recognized types, including the bare `color` tag.
    pub fn known() -> impl Iterator<Item = Self> {
        KNOWN_TYPES
            .iter()
            .map(|(_, kind)| kind.clone())
            .chain(std::iter::once(Self::Color("color".to_string())))
    }

    /// The tag this type was resolved from.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Color(tag) | Self::Other(tag) => tag.as_str(),
            known => KNOWN_TYPES
                .iter()
                .find(|(_, kind)| kind == known)
                .map_or("", |(tag, _)| *tag),
        }
    }

    /// Keys of the record the parser extracts for this type.
    ///
    /// Passthrough types return an empty slice.
    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::CreationLog => &["created_at", "creator_id"],
            Self::Status => &["label", "index", "post_id", "changed_at"],
            Self::Checkbox => &["checked", "changed_at"],
            Self::LongText => &["text", "changed_at"],
            Self::Link => &["url", "text", "changed_at"],
            Self::Date => &["date", "time", "changed_at"],
            Self::Timeline => &["from", "to", "changed_at", "visualization_type"],
            Self::People => &["personsAndTeams", "changed_at", "persons_count", "teams_count"],
            Self::Dropdown => &["ids", "changed_at"],
            Self::Tags => &["tag_ids", "changed_at"],
            Self::Email => &["email", "text", "changed_at"],
            Self::Phone => &["phone", "countryShortName", "changed_at"],
            Self::File => &["files", "changed_at"],
            Self::BoardRelation | Self::Dependency => &["linkedPulseIds", "changed_at"],
            Self::Mirror => &["linkedPulseId", "linkedPulseColumnId"],
            Self::Location => &["address", "lat", "lng", "changed_at"],
            Self::Country => &["countryCode", "countryName", "changed_at"],
            Self::Rating => &["rating", "changed_at"],
            Self::Vote => &["votes", "voters", "changed_at"],
            Self::Hour => &["hour", "minute", "changed_at"],
            Self::Week => &["week", "startDate", "endDate", "changed_at"],
            Self::WorldClock => &["timezone", "changed_at"],
            Self::TimeTracking => &["duration", "startDate", "status", "changed_at"],
            Self::Button => &["label", "color", "url"],
            Self::LastUpdated => &["updatedAt", "updater"],
            Self::Doc => &["file_id", "changed_at"],
            Self::Color(_) => &["index", "post_id", "changed_at", "label", "color"],
            Self::Formula | Self::ItemId | Self::Text | Self::Numbers | Self::Other(_) => &[],
        }
    }

    /// Whether a value that is not JSON may still be handled as plain text.
    ///
    /// Types that only make sense as records report a decode failure instead.
    #[must_use]
    pub const fn accepts_scalar(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Numbers
                | Self::Formula
                | Self::ItemId
                | Self::Status
                | Self::LongText
                | Self::Email
                | Self::Phone
                | Self::Other(_)
        )
    }

    /// Types whose mappable value prefers the display text.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::Text | Self::Numbers | Self::Formula | Self::ItemId)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}
