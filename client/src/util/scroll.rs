//! In-page section navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nav buttons and hero calls-to-action name a section by id; this module
//! finds that region and scrolls it into view smoothly. The set of ids is owned
//! by the page (`crate::content::Section`), not by the navigator.
//!
//! An id with no matching region is a silent no-op. Navigation holds no
//! state, so repeated calls simply repeat the scroll.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// A page whose sections can be located by id and scrolled to.
pub trait SectionViewport {
    type Region;

    fn locate(&self, section_id: &str) -> Option<Self::Region>;
    fn scroll_into_view(&self, region: &Self::Region);
}

/// Bring `section_id` into view. Returns `false` without scrolling when no
/// region matches.
pub fn go_to<V: SectionViewport + ?Sized>(viewport: &V, section_id: &str) -> bool {
    let Some(region) = viewport.locate(section_id) else {
        log::debug!("no section with id {section_id:?}");
        return false;
    };
    viewport.scroll_into_view(&region);
    true
}

/// The live document: `getElementById` + smooth `scrollIntoView`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentViewport;

impl SectionViewport for DocumentViewport {
    #[cfg(feature = "hydrate")]
    type Region = web_sys::Element;
    #[cfg(not(feature = "hydrate"))]
    type Region = ();

    fn locate(&self, section_id: &str) -> Option<Self::Region> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(section_id))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = section_id;
            None
        }
    }

    fn scroll_into_view(&self, region: &Self::Region) {
        #[cfg(feature = "hydrate")]
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            region.scroll_into_view_with_scroll_into_view_options(&options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = region;
        }
    }
}

/// Scroll the live document to `section_id`.
pub fn scroll_to_section(section_id: &str) {
    go_to(&DocumentViewport, section_id);
}
