//! Fuzz target for scene documents.
//!
//! Parses arbitrary bytes as a scene document, then validates and builds
//! the scene, checking for panics, crashes, or hangs.

#![no_main]

use graphattr::scene::{GraphDocument, GraphScene, Scene};
use graphattr::validation::{validate_scene, ValidateOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(doc) = serde_json::from_slice::<GraphDocument>(data) else {
        return;
    };
    let _ = validate_scene(&doc, &ValidateOptions::default());

    let scene = GraphScene::from_document(&doc);
    let _ = scene.items_bounding_rect();
});
