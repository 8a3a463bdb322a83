use crate::constants::REFERENCE_BAND_PX;

/// Named content sections, in the order the tracker checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experiences,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Experiences,
        Section::Projects,
        Section::Certifications,
    ];

    /// Element id of the section, also the fragment its nav link targets.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experiences => "experiences",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Parse a nav `href` such as `#projects`.
    pub fn from_href(href: &str) -> Option<Section> {
        href.strip_prefix('#').and_then(Section::from_id)
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalSpan {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the span straddles the horizontal line `band` px below the
    /// viewport top. The top edge is inclusive, the bottom edge exclusive.
    #[inline]
    pub fn crosses(&self, band: f64) -> bool {
        self.top <= band && self.bottom > band
    }
}

/// First section (in `order`) whose span crosses `band`. Sections the
/// locator cannot find are skipped.
pub fn first_in_band<F>(order: &[Section], band: f64, mut locate: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<VerticalSpan>,
{
    order
        .iter()
        .copied()
        .find(|&s| locate(s).is_some_and(|span| span.crosses(band)))
}

/// Scroll-driven active section state.
///
/// Holds the candidate order, the reference band and the current active
/// section. Only [`SectionTracker::recompute`] writes the active value, and a
/// pass that matches nothing leaves it unchanged.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    order: Vec<Section>,
    band: f64,
    active: Option<Section>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(Section::ALL.to_vec(), REFERENCE_BAND_PX, Some(Section::About))
    }
}

impl SectionTracker {
    pub fn new(order: Vec<Section>, band: f64, initial: Option<Section>) -> Self {
        Self {
            order,
            band,
            active: initial,
        }
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    /// Re-evaluate the band test against the current layout. Returns the new
    /// active section when it changed.
    pub fn recompute<F>(&mut self, locate: F) -> Option<Section>
    where
        F: FnMut(Section) -> Option<VerticalSpan>,
    {
        let found = first_in_band(&self.order, self.band, locate)?;
        if self.active == Some(found) {
            return None;
        }
        self.active = Some(found);
        Some(found)
    }
}
