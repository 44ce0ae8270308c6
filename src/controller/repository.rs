use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::DataLoadError;
use crate::model::{CourseRecord, REQUIRED_FIELDS};

pub const DATASET_STALENESS: Duration = Duration::seconds(60);

/// An immutable view of the dataset as of one load.
#[derive(Debug, Clone)]
pub struct CourseSnapshot {
    pub courses: Arc<Vec<CourseRecord>>,
    pub loaded_at: DateTime<Utc>,
}

struct RepositoryState {
    snapshot: CourseSnapshot,
    checked_at: DateTime<Utc>,
}

pub struct CourseRepository {
    path: PathBuf,
    staleness: Duration,
    clock: Arc<dyn Clock>,
    state: RwLock<RepositoryState>,
}

/// Parse and validate a dataset. Every record must carry every required
/// field, and names must be unique.
///
/// # Errors
///
/// Will return `Err` if the json is malformed or any record is incomplete or invalid
pub fn parse_courses(contents: &str) -> Result<Vec<CourseRecord>, DataLoadError> {
    let json: Value = serde_json::from_str(contents)?;
    let Value::Array(elements) = json else {
        return Err(DataLoadError::NotAnArray);
    };

    let mut courses = Vec::with_capacity(elements.len());
    let mut seen = HashSet::new();
    for (index, element) in elements.into_iter().enumerate() {
        let Some(object) = element.as_object() else {
            return Err(DataLoadError::Malformed {
                index,
                reason: "expected a json object".to_string(),
            });
        };
        for &field in REQUIRED_FIELDS {
            if object.get(field).is_none_or(Value::is_null) {
                return Err(DataLoadError::MissingField { index, field });
            }
        }

        let course: CourseRecord =
            serde_json::from_value(element).map_err(|e| DataLoadError::Malformed {
                index,
                reason: e.to_string(),
            })?;
        course.validate().map_err(|reason| DataLoadError::Invalid {
            name: course.name.clone(),
            reason,
        })?;
        if !seen.insert(course.name.clone()) {
            return Err(DataLoadError::Invalid {
                name: course.name,
                reason: "duplicate course name".to_string(),
            });
        }
        courses.push(course);
    }
    Ok(courses)
}

/// # Errors
///
/// Will return `Err` if the file is missing, unreadable or not a valid dataset
pub async fn load_courses(path: &Path) -> Result<Vec<CourseRecord>, DataLoadError> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::Missing(path.display().to_string())
        } else {
            DataLoadError::Unreadable {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;
    parse_courses(&contents)
}

impl CourseRepository {
    /// Performs the initial load, which is the only fatal one.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the dataset cannot be loaded
    pub async fn open(
        path: impl Into<PathBuf>,
        staleness: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DataLoadError> {
        let path = path.into();
        let courses = load_courses(&path).await?;
        let now = clock.now();
        info!(path = %path.display(), courses = courses.len(), "loaded course dataset");
        Ok(Self {
            path,
            staleness,
            clock,
            state: RwLock::new(RepositoryState {
                snapshot: CourseSnapshot {
                    courses: Arc::new(courses),
                    loaded_at: now,
                },
                checked_at: now,
            }),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the source unconditionally. Snapshots handed out earlier are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the dataset cannot be loaded; the previous snapshot stays current
    pub async fn load(&self) -> Result<CourseSnapshot, DataLoadError> {
        let mut state = self.state.write().await;
        self.reload_locked(&mut state).await
    }

    /// The current dataset, re-read first if the staleness window has passed.
    /// A failed re-read keeps serving the previous data.
    pub async fn snapshot(&self) -> CourseSnapshot {
        {
            let state = self.state.read().await;
            if self.clock.now() - state.checked_at < self.staleness {
                return state.snapshot.clone();
            }
        }

        let mut state = self.state.write().await;
        // another caller may have reloaded while we waited for the lock
        if self.clock.now() - state.checked_at < self.staleness {
            return state.snapshot.clone();
        }
        match self.reload_locked(&mut state).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "dataset reload failed, keeping previous data");
                state.checked_at = self.clock.now();
                state.snapshot.clone()
            }
        }
    }

    async fn reload_locked(
        &self,
        state: &mut RepositoryState,
    ) -> Result<CourseSnapshot, DataLoadError> {
        let courses = load_courses(&self.path).await?;
        let now = self.clock.now();
        info!(path = %self.path.display(), courses = courses.len(), "reloaded course dataset");
        state.snapshot = CourseSnapshot {
            courses: Arc::new(courses),
            loaded_at: now,
        };
        state.checked_at = now;
        Ok(state.snapshot.clone())
    }
}
