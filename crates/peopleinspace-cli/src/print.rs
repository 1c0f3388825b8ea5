//! Plain-text rendering of the two views, for the one-shot commands.

use std::fmt::Write;

use crate::screens::detail::DetailView;
use crate::screens::list::ListView;
use crate::screens::{IMAGE_MARK, IMAGE_SPACER};

pub fn list_text(view: &ListView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.header);
    let _ = writeln!(out, "{}", "-".repeat(view.header.chars().count()));
    for row in &view.rows {
        let slot = if row.image.is_image() {
            IMAGE_MARK
        } else {
            IMAGE_SPACER
        };
        let _ = writeln!(out, "{slot} {} ({})", row.person.name(), row.person.craft());
    }
    out
}

pub fn detail_text(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    if let Some(body) = &view.body {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", body.name);
        let _ = writeln!(out, "{}", body.craft);
        if let Some(url) = &body.image {
            let _ = writeln!(out, "{IMAGE_MARK} {url}");
        }
        if !body.bio.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", body.bio);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::facade;
    use crate::screens::{detail, list};
    use peopleinspace_models::PositionRecord;
    use peopleinspace_sdk::ViewModelFacade;

    #[test]
    fn list_text_matches_feed() {
        let repo = facade();
        let people = repo.observe_people_in_space().borrow().clone();
        let text = list_text(&list::view(&people, PositionRecord::new(1.0, 2.0), &repo));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "People In Space");
        assert_eq!(lines[1], "ISS Position = (1.0, 2.0)");
        assert_eq!(lines[3], "[photo] Alice (Soyuz)");
        assert_eq!(lines[4], "        Bob (Dragon)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn detail_text_for_unknown_is_title_only() {
        let text = detail_text(&detail::view("Zed", &facade()));
        assert_eq!(text, "← Zed\n");
    }

    #[test]
    fn detail_text_without_photo_or_bio() {
        let text = detail_text(&detail::view("Bob", &facade()));
        assert_eq!(text, "← Bob\n\nBob\nDragon\n");
    }
}
