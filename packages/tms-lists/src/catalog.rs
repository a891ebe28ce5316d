//! Named lists behind the console pages.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tms_odata::ListId;

use crate::Error;

/// One list per console page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    Gradesheets,
    Personnel,
    Courses,
    GradesheetTemplates,
}

impl ListName {
    pub const ALL: [ListName; 4] = [
        ListName::Gradesheets,
        ListName::Personnel,
        ListName::Courses,
        ListName::GradesheetTemplates,
    ];

    /// Display title of the list, as SharePoint names it.
    pub fn title(self) -> &'static str {
        match self {
            ListName::Gradesheets => "Gradesheets",
            ListName::Personnel => "Personnel",
            ListName::Courses => "Courses",
            ListName::GradesheetTemplates => "Gradesheet Templates",
        }
    }

    /// Config key under `lists`.
    pub fn key(self) -> &'static str {
        match self {
            ListName::Gradesheets => "gradesheets",
            ListName::Personnel => "personnel",
            ListName::Courses => "courses",
            ListName::GradesheetTemplates => "gradesheet_templates",
        }
    }

    /// `SP.Data.*ListItem` type for verbose payloads.
    pub fn entity_type(self) -> String {
        tms_odata::entity_type_name(self.title())
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ListName {
    type Err = Error;

    /// Accepts `gradesheet-templates`, `gradesheet_templates`,
    /// `GradesheetTemplates` and `Gradesheet Templates` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "gradesheets" => Ok(ListName::Gradesheets),
            "personnel" => Ok(ListName::Personnel),
            "courses" => Ok(ListName::Courses),
            "gradesheettemplates" => Ok(ListName::GradesheetTemplates),
            _ => Err(Error::InvalidInput(format!("unknown list name: {s}"))),
        }
    }
}

/// List GUIDs per page. Unset entries are unconfigured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCatalog {
    #[serde(default)]
    pub gradesheets: Option<String>,
    #[serde(default)]
    pub personnel: Option<String>,
    #[serde(default)]
    pub courses: Option<String>,
    #[serde(default)]
    pub gradesheet_templates: Option<String>,
}

impl ListCatalog {
    fn guid(&self, name: ListName) -> Option<&str> {
        let guid = match name {
            ListName::Gradesheets => &self.gradesheets,
            ListName::Personnel => &self.personnel,
            ListName::Courses => &self.courses,
            ListName::GradesheetTemplates => &self.gradesheet_templates,
        };
        guid.as_deref().filter(|g| !g.trim().is_empty())
    }

    /// GUID configured for `name`.
    pub fn resolve(&self, name: ListName) -> Result<ListId, Error> {
        self.guid(name).map(ListId::new).ok_or_else(|| {
            Error::Config(format!(
                "list `{name}` has no GUID configured (set TMS_LISTS__{})",
                name.key().to_uppercase()
            ))
        })
    }

    /// Resolve a catalog name, or take the argument as a raw list GUID.
    /// Anything that is neither is rejected locally.
    pub fn lookup(&self, name_or_guid: &str) -> Result<ListId, Error> {
        match name_or_guid.parse::<ListName>() {
            Ok(name) => self.resolve(name),
            Err(_) if looks_like_guid(name_or_guid) => Ok(ListId::new(name_or_guid)),
            Err(e) => Err(e),
        }
    }

    /// Names that have a GUID configured.
    pub fn configured(&self) -> Vec<ListName> {
        ListName::ALL
            .into_iter()
            .filter(|n| self.guid(*n).is_some())
            .collect()
    }
}

/// Hex digits and dashes only, with at least one hex digit.
fn looks_like_guid(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_hexdigit())
        && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}
