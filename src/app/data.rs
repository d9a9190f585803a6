// src/app/data.rs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    /// Running time in minutes.
    pub duration: u32,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, year: i32, duration: u32) -> Self {
        Self {
            title: title.into(),
            year,
            duration,
        }
    }

    pub fn year_label(&self) -> String {
        self.year.to_string()
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration)
    }
}
