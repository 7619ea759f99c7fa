//! The fixed set of product image assets.
//!
//! There is no upload mechanism: a product's `image` field is one of a
//! small, enumerated set of static asset paths. The storefront renders the
//! set as a select control and the paths are stored verbatim in the record
//! store.

/// A selectable product image: the stored asset path and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOption {
    /// Asset path as stored in the record store (e.g. `/String Of Pearls.png`).
    pub path: &'static str,
    /// Human-readable label shown in the image select control.
    pub label: &'static str,
}

/// All image assets a product can reference.
pub const IMAGE_OPTIONS: &[ImageOption] = &[
    ImageOption {
        path: "/Sempervivum Calcareum.png",
        label: "Sempervivum Calcareum",
    },
    ImageOption {
        path: "/Ice Plant Corpuscularia Lehmannii.png",
        label: "Ice Plant",
    },
    ImageOption {
        path: "/Moonstones Pachyphytum.png",
        label: "Moonstones",
    },
    ImageOption {
        path: "/String Of Pearls.png",
        label: "String of Pearls",
    },
];

/// Whether a path belongs to the fixed image set.
#[must_use]
pub fn is_known_image(path: &str) -> bool {
    IMAGE_OPTIONS.iter().any(|option| option.path == path)
}
