//! Footer year stamp.

/// Text written into the footer year placeholder, read once at setup.
pub fn year_stamp(year: i32) -> String {
    year.to_string()
}
