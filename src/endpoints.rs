//! URL template table for the remote API surface.

pub const CALENDARS: &str = "/calendars";
pub const ONE_CALENDAR: &str = "/calendars/{id}";
pub const SCHEDULING_PAGES: &str = "/manage/pages";
pub const ONE_SCHEDULING_PAGE: &str = "/manage/pages/{id}";

/// Substitute a resource id into a path template.
pub fn interpolate(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}
