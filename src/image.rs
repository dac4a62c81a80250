//! Image references that fall back to a placeholder when they fail to load.

use thiserror::Error;
use url::Url;

/// Schemes [`UrlProbe`] accepts as loadable.
const LOADABLE_SCHEMES: [&str; 3] = ["http", "https", "builtin"];

/// Reference to the image shown when an avatar cannot be loaded.
pub const DEFAULT_FALLBACK: &str = "builtin:no-image";

/// Why an image reference could not be loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
	#[error("image source is empty")]
	Empty,
	#[error("image source '{src}' is not a valid URL: {reason}")]
	InvalidUrl { src: String, reason: String },
	#[error("image scheme '{scheme}' is not supported")]
	UnsupportedScheme { scheme: String },
}

/// Decides whether an image reference can be displayed.
pub trait ImageProbe {
	fn check(&self, src: &str) -> Result<(), ImageError>;
}

/// Accepts absolute URLs using one of the supported schemes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlProbe;

impl ImageProbe for UrlProbe {
	fn check(&self, src: &str) -> Result<(), ImageError> {
		let src = src.trim();
		if src.is_empty() {
			return Err(ImageError::Empty);
		}
		let url = Url::parse(src).map_err(|err| ImageError::InvalidUrl {
			src: src.to_string(),
			reason: err.to_string(),
		})?;
		if LOADABLE_SCHEMES.contains(&url.scheme()) {
			Ok(())
		} else {
			Err(ImageError::UnsupportedScheme {
				scheme: url.scheme().to_string(),
			})
		}
	}
}

/// Which reference an image currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStage {
	/// The original source.
	Primary,
	/// The configured fallback, after the original failed.
	Fallback,
	/// Both failed; a broken-image marker is shown.
	Broken,
}

/// An image source with a one-shot fallback.
///
/// The first load failure swaps in the fallback. A failure of the fallback
/// is final: the image is marked broken and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
	src: String,
	fallback: String,
	stage: ImageStage,
}

impl FallbackImage {
	#[must_use]
	pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			fallback: fallback.into(),
			stage: ImageStage::Primary,
		}
	}

	/// Reference the image was created for.
	#[must_use]
	pub fn src(&self) -> &str {
		&self.src
	}

	#[must_use]
	pub fn stage(&self) -> ImageStage {
		self.stage
	}

	/// Reference that should be rendered, or `None` once broken.
	#[must_use]
	pub fn current_src(&self) -> Option<&str> {
		match self.stage {
			ImageStage::Primary => Some(&self.src),
			ImageStage::Fallback => Some(&self.fallback),
			ImageStage::Broken => None,
		}
	}

	/// Record that the current reference failed to load.
	pub fn on_error(&mut self) -> ImageStage {
		self.stage = match self.stage {
			ImageStage::Primary => {
				tracing::debug!(src = %self.src, fallback = %self.fallback, "image failed, using fallback");
				ImageStage::Fallback
			}
			ImageStage::Fallback | ImageStage::Broken => ImageStage::Broken,
		};
		self.stage
	}

	/// Load the current reference through `probe`, falling back as needed.
	pub fn resolve(&mut self, probe: &dyn ImageProbe) -> ImageStage {
		while let Some(src) = self.current_src() {
			match probe.check(src) {
				Ok(()) => break,
				Err(_) => {
					self.on_error();
				}
			}
		}
		self.stage
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	struct ScriptedProbe {
		failing: Vec<&'static str>,
		calls: RefCell<Vec<String>>,
	}

	impl ImageProbe for ScriptedProbe {
		fn check(&self, src: &str) -> Result<(), ImageError> {
			self.calls.borrow_mut().push(src.to_string());
			if self.failing.contains(&src) {
				Err(ImageError::Empty)
			} else {
				Ok(())
			}
		}
	}

	#[test]
	fn failed_source_switches_to_fallback_once() {
		let mut image = FallbackImage::new("https://cdn.example/a.webp", "builtin:no-image");
		assert_eq!(image.current_src(), Some("https://cdn.example/a.webp"));

		assert_eq!(image.on_error(), ImageStage::Fallback);
		assert_eq!(image.current_src(), Some("builtin:no-image"));
	}

	#[test]
	fn failing_fallback_ends_broken_without_retry() {
		let mut image = FallbackImage::new("bad", "also-bad");
		let probe = ScriptedProbe {
			failing: vec!["bad", "also-bad"],
			calls: RefCell::new(Vec::new()),
		};

		assert_eq!(image.resolve(&probe), ImageStage::Broken);
		assert_eq!(image.current_src(), None);
		assert_eq!(*probe.calls.borrow(), vec!["bad", "also-bad"]);

		assert_eq!(image.resolve(&probe), ImageStage::Broken);
		assert_eq!(probe.calls.borrow().len(), 2, "broken images are not retried");
	}

	#[test]
	fn resolve_uses_fallback_when_primary_fails() {
		let mut image = FallbackImage::new("", DEFAULT_FALLBACK);
		assert_eq!(image.resolve(&UrlProbe), ImageStage::Fallback);
		assert_eq!(image.current_src(), Some(DEFAULT_FALLBACK));
	}

	#[test]
	fn url_probe_accepts_http_and_builtin() {
		assert!(UrlProbe.check("https://cdn.example/avatar.webp").is_ok());
		assert!(UrlProbe.check("builtin:no-image").is_ok());
		assert_eq!(UrlProbe.check("  "), Err(ImageError::Empty));
		assert!(matches!(
			UrlProbe.check("ftp://example.com/a.png"),
			Err(ImageError::UnsupportedScheme { .. })
		));
		assert!(matches!(
			UrlProbe.check("avatar.png"),
			Err(ImageError::InvalidUrl { .. })
		));
	}
}
