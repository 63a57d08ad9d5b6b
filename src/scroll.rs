// ---------------------------------------------------------------------------
// Scroll-reactive state — pure derivation from one observed offset
// ---------------------------------------------------------------------------
//
// The page feeds each scroll event's offset into `observe`; everything the
// presentation layer needs (condensed header, sticky CTA, active section) is
// derived from that single value against fixed thresholds. The state is
// page-local and dropped on unmount, so nothing outlives the page that
// subscribed.
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Fixed offsets, in pixels, at which derived flags flip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollThresholds {
	/// Header switches to its condensed treatment past this offset.
	#[serde(rename = "condensedHeader")]
	pub condensed_header: f64,
	/// Sticky call-to-action appears past this offset.
	#[serde(rename = "stickyCta")]
	pub sticky_cta: f64,
}

impl Default for ScrollThresholds {
	fn default() -> Self {
		Self {
			condensed_header: 20.0,
			sticky_cta: 600.0,
		}
	}
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Vertical bounds of one page section, for active-nav tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub bottom: f64,
}

impl SectionBounds {
	pub fn new(id: &str, top: f64, bottom: f64) -> Self {
		Self {
			id: id.to_string(),
			top,
			bottom,
		}
	}
}

// ---------------------------------------------------------------------------
// ScrollState / ScrollView
// ---------------------------------------------------------------------------

/// Derived flags for the current offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollView {
	#[serde(rename = "condensedHeader")]
	pub condensed_header: bool,
	#[serde(rename = "stickyCta")]
	pub sticky_cta: bool,
	#[serde(rename = "activeSection")]
	pub active_section: Option<String>,
}

/// Per-page scroll subscription: remembers the last observed offset and
/// derives [`ScrollView`] on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
	thresholds: ScrollThresholds,
	sections: Vec<SectionBounds>,
	offset: f64,
}

impl ScrollState {
	pub fn new(thresholds: ScrollThresholds) -> Self {
		Self {
			thresholds,
			sections: Vec::new(),
			offset: 0.0,
		}
	}

	pub fn with_sections(mut self, sections: Vec<SectionBounds>) -> Self {
		self.sections = sections;
		self
	}

	/// Record a scroll event's offset. Negative offsets (overscroll bounce)
	/// clamp to zero.
	pub fn observe(&mut self, offset: f64) {
		self.offset = offset.max(0.0);
	}

	pub fn offset(&self) -> f64 {
		self.offset
	}

	/// Derive the current flags. Pure in the observed offset: calling twice
	/// without an intervening `observe` yields the same view.
	pub fn view(&self) -> ScrollView {
		let active_section = self
			.sections
			.iter()
			.find(|s| self.offset >= s.top && self.offset < s.bottom)
			.map(|s| s.id.clone());
		ScrollView {
			condensed_header: self.offset > self.thresholds.condensed_header,
			sticky_cta: self.offset > self.thresholds.sticky_cta,
			active_section,
		}
	}
}

impl Default for ScrollState {
	fn default() -> Self {
		Self::new(ScrollThresholds::default())
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flags_start_off_at_top() {
		let state = ScrollState::default();
		let view = state.view();
		assert!(!view.condensed_header);
		assert!(!view.sticky_cta);
		assert_eq!(view.active_section, None);
	}

	#[test]
	fn condensed_header_flips_past_threshold() {
		let mut state = ScrollState::default();
		state.observe(20.0);
		assert!(!state.view().condensed_header);
		state.observe(21.0);
		assert!(state.view().condensed_header);
	}

	#[test]
	fn sticky_cta_flips_past_threshold() {
		let mut state = ScrollState::default();
		state.observe(600.0);
		assert!(!state.view().sticky_cta);
		state.observe(601.0);
		assert!(state.view().sticky_cta);
		state.observe(200.0);
		assert!(!state.view().sticky_cta);
	}

	#[test]
	fn active_section_tracks_bounds() {
		let mut state = ScrollState::default().with_sections(vec![
			SectionBounds::new("overview", 0.0, 800.0),
			SectionBounds::new("library", 800.0, 2000.0),
		]);
		state.observe(400.0);
		assert_eq!(state.view().active_section.as_deref(), Some("overview"));
		state.observe(800.0);
		assert_eq!(state.view().active_section.as_deref(), Some("library"));
		state.observe(2500.0);
		assert_eq!(state.view().active_section, None);
	}

	#[test]
	fn negative_offset_clamps_to_zero() {
		let mut state = ScrollState::default();
		state.observe(-40.0);
		assert_eq!(state.offset(), 0.0);
	}

	#[test]
	fn view_is_pure_in_the_observed_offset() {
		let mut state = ScrollState::default();
		state.observe(700.0);
		assert_eq!(state.view(), state.view());
	}
}
