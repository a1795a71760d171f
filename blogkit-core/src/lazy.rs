//! Deferred image loading driven by visibility notifications.
use crate::config::EnhancerConfig;

/// An image whose real source is deferred until it scrolls into view.
pub trait LazyImage {
    fn deferred_source(&self, attribute: &str) -> Option<String>;
    fn current_source(&self) -> String;
    fn set_source(&self, src: &str);
    fn mark_loaded(&self, class: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderMode {
    /// The platform can report viewport intersections.
    Observing,
    /// No visibility observer; images keep their placeholder source.
    Unsupported,
}

pub struct LazyLoader<I>
where
    I: LazyImage + PartialEq,
{
    pending: Vec<I>,
    deferred_attribute: String,
    loaded_class: String,
}

impl<I> LazyLoader<I>
where
    I: LazyImage + PartialEq,
{
    pub fn new(images: Vec<I>, mode: LoaderMode, cfg: &EnhancerConfig) -> Self {
        let pending = match mode {
            LoaderMode::Observing => images,
            LoaderMode::Unsupported => {
                log::debug!(
                    "visibility observer unavailable; {} lazy image(s) stay deferred",
                    images.len()
                );
                Vec::new()
            }
        };
        Self {
            pending,
            deferred_attribute: cfg.deferred_src_attribute.clone(),
            loaded_class: cfg.loaded_class.clone(),
        }
    }

    /// Images still waiting to become visible; the caller registers these with its observer.
    #[must_use]
    pub fn pending(&self) -> &[I] {
        &self.pending
    }

    /// Handle a batch of `(image, is_intersecting)` notifications.
    ///
    /// Returns the images that were revealed so the caller can stop observing
    /// them. An image is revealed at most once.
    pub fn on_intersection<E>(&mut self, entries: E) -> Vec<I>
    where
        E: IntoIterator<Item = (I, bool)>,
    {
        let mut revealed = Vec::new();
        for (image, intersecting) in entries {
            if !intersecting {
                continue;
            }
            let Some(pos) = self.pending.iter().position(|p| *p == image) else {
                continue;
            };
            let image = self.pending.swap_remove(pos);
            let src = image
                .deferred_source(&self.deferred_attribute)
                .unwrap_or_else(|| image.current_source());
            image.set_source(&src);
            image.mark_loaded(&self.loaded_class);
            revealed.push(image);
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingImage;

    #[test]
    fn visible_image_swaps_source_once() {
        let img = RecordingImage::new("placeholder.png", Some("full.jpg"));
        let mut loader = LazyLoader::new(
            vec![img.clone()],
            LoaderMode::Observing,
            &EnhancerConfig::default(),
        );
        let revealed = loader.on_intersection([(img.clone(), true)]);
        assert_eq!(revealed.len(), 1);
        assert_eq!(img.source(), "full.jpg");
        assert!(img.is_loaded());
        assert!(loader.pending().is_empty());

        assert!(loader.on_intersection([(img.clone(), true)]).is_empty());
        assert_eq!(img.writes(), 1);
    }

    #[test]
    fn missing_deferred_source_keeps_current() {
        let img = RecordingImage::new("inline.png", None);
        let mut loader = LazyLoader::new(
            vec![img.clone()],
            LoaderMode::Observing,
            &EnhancerConfig::default(),
        );
        loader.on_intersection([(img.clone(), true)]);
        assert_eq!(img.source(), "inline.png");
        assert!(img.is_loaded());
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let a = RecordingImage::new("a.png", Some("a-full.png"));
        let b = RecordingImage::new("b.png", Some("b-full.png"));
        let mut loader = LazyLoader::new(
            vec![a.clone(), b.clone()],
            LoaderMode::Observing,
            &EnhancerConfig::default(),
        );
        let revealed = loader.on_intersection([(a.clone(), false), (b.clone(), true)]);
        assert_eq!(revealed, vec![b.clone()]);
        assert_eq!(a.source(), "a.png");
        assert_eq!(loader.pending(), &[a]);
    }

    #[test]
    fn unsupported_mode_never_upgrades() {
        let img = RecordingImage::new("p.png", Some("full.png"));
        let mut loader = LazyLoader::new(
            vec![img.clone()],
            LoaderMode::Unsupported,
            &EnhancerConfig::default(),
        );
        assert!(loader.pending().is_empty());
        assert!(loader.on_intersection([(img.clone(), true)]).is_empty());
        assert_eq!(img.source(), "p.png");
        assert!(!img.is_loaded());
    }
}
