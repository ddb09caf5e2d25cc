//! Page-set concatenation.
//!
//! Each pipeline stage renders an independent PDF; this module stitches
//! those page sets into one document. Page order within a set and the
//! order of the sets themselves are both preserved.

use crate::error::Error;
use lopdf::{dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Concatenate rendered page sets into one document.
///
/// Returns the merged document together with its total page count.
pub fn merge_page_sets(parts: &[Vec<u8>]) -> Result<(Document, usize), Error> {
    // collect pages in reading order and all objects from every part,
    // renumbered into one id space
    let mut pages: Vec<(ObjectId, Object)> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
    let mut max_id = 1;

    for part in parts {
        let mut doc = Document::load_mem(part)?;
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        for (_, object_id) in doc.get_pages() {
            let page = doc.get_object(object_id)?.to_owned();
            pages.push((object_id, page));
        }
        objects.append(&mut doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.max_id = max_id;

    // carry everything except the per-part page-tree plumbing, which is
    // rebuilt below around the combined page list
    for (object_id, object) in objects {
        if !is_page_tree_object(&object) {
            merged.objects.insert(object_id, object);
        }
    }

    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = pages
        .iter()
        .map(|(object_id, _)| Object::Reference(*object_id))
        .collect();
    let page_count = pages.len();

    for (object_id, object) in pages {
        if let Ok(dict) = object.as_dict() {
            let mut dict = dict.clone();
            dict.set("Parent", pages_id);
            merged.objects.insert(object_id, Object::Dictionary(dict));
        }
    }

    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => page_count as i64,
            "Kids" => kids,
        }),
    );

    let catalog_id = merged.new_object_id();
    merged.objects.insert(
        catalog_id,
        Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }),
    );
    merged.trailer.set("Root", catalog_id);

    merged.renumber_objects();
    merged.compress();

    Ok((merged, page_count))
}

fn is_page_tree_object(object: &Object) -> bool {
    const PAGE_TREE_TYPES: [&[u8]; 4] = [b"Catalog", b"Pages", b"Page", b"Outlines"];
    dict_type(object).is_some_and(|kind| PAGE_TREE_TYPES.contains(&kind))
}

fn dict_type(object: &Object) -> Option<&[u8]> {
    object.as_dict().ok()?.get(b"Type").ok()?.as_name().ok()
}
