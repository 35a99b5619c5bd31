use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One portfolio entry as shown in the modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: String,
    pub link: String,
}

impl Project {
    pub fn new(title: &str, image: &str, description: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        }
    }
}

/// Immutable lookup from the `data-project` attribute value to its record.
///
/// Keys are matched as exact strings, the same way the markup spells them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTable {
    entries: BTreeMap<String, Project>,
}

impl ProjectTable {
    /// The three records shipped with the site template.
    pub fn sample() -> Self {
        (1..=3)
            .map(|n| {
                (
                    n.to_string(),
                    Project {
                        title: format!("Project Title {}", n),
                        image: format!("images/project{}.jpg", n),
                        description: format!("Detailed description of Project {}.", n),
                        link: format!("https://liveproject{}.com", n),
                    },
                )
            })
            .collect()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.entries.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Project)> for ProjectTable {
    fn from_iter<I: IntoIterator<Item = (String, Project)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
