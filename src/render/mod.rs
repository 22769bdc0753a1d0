// src/render/mod.rs
//
// Turning a DeviceResult (or an error) into what the two display regions show.
//
// - Fragment:     what a region holds (device picture, spec sheet, error).
// - RenderTarget: a region owned by the host. `HtmlTarget` keeps inner HTML,
//                 `Region` keeps the fragment for hosts that draw it themselves.
// - Surface:      both regions plus the loading indicator, handed to the
//                 controller at construction.

pub mod html;
pub mod text;

use crate::{
    config::consts::{ PLACEHOLDER_IMAGE, SHEET_HEADING, SOURCE_LINE },
    core::sanitize::present,
    progress::LoadingIndicator,
    specs::{ DeviceResult, GroupKey, GROUP_ORDER },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecSection {
    pub key: GroupKey,
    pub items: Vec<SpecItem>,
}

impl SpecSection {
    pub fn title(&self) -> &'static str { self.key.title() }
    pub fn icon(&self) -> &'static str { self.key.icon() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecSheet {
    pub heading: String,
    /// Non-empty sections only, in group order.
    pub sections: Vec<SpecSection>,
    pub source: &'static str,
}

impl SpecSheet {
    pub fn section(&self, key: GroupKey) -> Option<&SpecSection> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// Build the sheet: every group in order, each row filtered through `present`,
/// empty groups dropped.
pub fn build_sheet(device: &DeviceResult) -> SpecSheet {
    let sections = GROUP_ORDER
        .iter()
        .filter_map(|key| {
            let items: Vec<SpecItem> = key
                .fields()
                .filter_map(|f| {
                    present(f.value(&device.specs)).map(|v| SpecItem { label: f.label, value: s!(v) })
                })
                .collect();
            if items.is_empty() { None } else { Some(SpecSection { key: *key, items }) }
        })
        .collect();

    SpecSheet {
        heading: format!("{} {}", SHEET_HEADING, device.title),
        sections,
        source: SOURCE_LINE,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Device {
        title: String,
        image_url: String,
        /// Shown instead of `image_url` when that fails to load.
        fallback_url: String,
    },
    Sheet(SpecSheet),
    Error(String),
}

pub trait RenderTarget {
    /// Replace whatever the region shows.
    fn replace(&mut self, fragment: Fragment);
    fn clear(&mut self);
}

/// Region that keeps the fragment itself.
#[derive(Clone, Debug, Default)]
pub struct Region {
    content: Option<Fragment>,
}

impl Region {
    pub fn content(&self) -> Option<&Fragment> { self.content.as_ref() }
    pub fn is_empty(&self) -> bool { self.content.is_none() }
}

impl RenderTarget for Region {
    fn replace(&mut self, fragment: Fragment) { self.content = Some(fragment); }
    fn clear(&mut self) { self.content = None; }
}

/// Region that keeps inner HTML, like a DOM element's `innerHTML`.
#[derive(Clone, Debug, Default)]
pub struct HtmlTarget {
    html: String,
}

impl HtmlTarget {
    pub fn html(&self) -> &str { &self.html }
}

impl RenderTarget for HtmlTarget {
    fn replace(&mut self, fragment: Fragment) { self.html = html::fragment(&fragment); }
    fn clear(&mut self) { self.html.clear(); }
}

/// The two display regions and the loading toggle.
#[derive(Clone, Debug, Default)]
pub struct Surface<T, L> {
    pub image: T,
    pub results: T,
    pub loading: L,
}

impl<T: RenderTarget, L: LoadingIndicator> Surface<T, L> {
    pub fn new(image: T, results: T, loading: L) -> Self {
        Self { image, results, loading }
    }

    /// Blank both regions (start of a search).
    pub fn clear(&mut self) {
        self.image.clear();
        self.results.clear();
    }

    pub fn render_image(&mut self, title: &str, image_url: &str) {
        self.image.replace(Fragment::Device {
            title: s!(title),
            image_url: s!(image_url),
            fallback_url: s!(PLACEHOLDER_IMAGE),
        });
    }

    pub fn render_specs(&mut self, device: &DeviceResult) {
        self.results.replace(Fragment::Sheet(build_sheet(device)));
    }

    /// Results region shows `message`, image region is emptied. Safe to repeat.
    pub fn render_error(&mut self, message: &str) {
        self.results.replace(Fragment::Error(s!(message)));
        self.image.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullIndicator;
    use crate::specs::schema::{ Display, Launch, SpecGroups };

    fn device(specs: SpecGroups) -> DeviceResult {
        DeviceResult { title: s!("Samsung Galaxy S24 Ultra"), image: s!("https://img/s24.jpg"), specs }
    }

    #[test]
    fn display_section_keeps_only_present_values() {
        let d = device(SpecGroups {
            display: Some(Display {
                kind: Some(s!("-")),
                size: Some(s!("6.8 inches")),
                resolution: Some(s!("-")),
                protection: Some(s!("-")),
            }),
            ..Default::default()
        });
        let sheet = build_sheet(&d);
        assert_eq!(sheet.sections.len(), 1);
        let disp = sheet.section(GroupKey::Display).unwrap();
        assert_eq!(disp.items, vec![SpecItem { label: "Size", value: s!("6.8 inches") }]);
        assert_eq!(sheet.heading, "Full Specifications Samsung Galaxy S24 Ultra");
        assert_eq!(sheet.source, "Source: GSMArena via Varshade API");
    }

    #[test]
    fn all_missing_group_is_dropped() {
        let d = device(SpecGroups {
            launch: Some(Launch { announced: Some(s!("-")), status: None }),
            ..Default::default()
        });
        assert!(build_sheet(&d).sections.is_empty());
    }

    #[test]
    fn render_error_is_idempotent() {
        let mut once: Surface<HtmlTarget, NullIndicator> =
            Surface::new(HtmlTarget::default(), HtmlTarget::default(), NullIndicator);
        once.render_image("t", "u");
        once.render_error("boom");

        let mut twice: Surface<HtmlTarget, NullIndicator> =
            Surface::new(HtmlTarget::default(), HtmlTarget::default(), NullIndicator);
        twice.render_image("t", "u");
        twice.render_error("boom");
        twice.render_error("boom");

        assert_eq!(once.results.html(), twice.results.html());
        assert_eq!(once.image.html(), twice.image.html());
        assert!(twice.image.html().is_empty());
    }

    #[test]
    fn region_keeps_fragment() {
        let mut r = Region::default();
        assert!(r.is_empty());
        r.replace(Fragment::Error(s!("x")));
        assert_eq!(r.content(), Some(&Fragment::Error(s!("x"))));
        r.clear();
        assert!(r.is_empty());
    }
}
