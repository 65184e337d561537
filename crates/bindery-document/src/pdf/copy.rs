// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page-graph copying between lopdf documents.
//
// A page dictionary transitively references content streams, fonts, images,
// and other resources. Importing a page walks that graph, clones every object
// into the target document, and appends the page to the target's page tree.
// Objects referenced by more than one page of the same source (shared fonts,
// shared images) are imported once and reused.

use std::collections::BTreeMap;

use bindery_core::error::BinderyError;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::warn;

/// Imports page object graphs from one source document into a target.
///
/// One importer per source document; the id map lives as long as the importer,
/// so importing several pages of the same source deduplicates their shared
/// resources.
pub struct ObjectImporter<'a> {
    source: &'a Document,
    imported: BTreeMap<ObjectId, ObjectId>,
}

impl<'a> ObjectImporter<'a> {
    pub fn new(source: &'a Document) -> Self {
        Self {
            source,
            imported: BTreeMap::new(),
        }
    }

    /// Copy one page (and everything it references) into `target`, appending
    /// it as the last page of the target's page tree.
    pub fn import_page(
        &mut self,
        target: &mut Document,
        page_id: ObjectId,
    ) -> Result<(), BinderyError> {
        let source = self.source;
        let page_object = source.get_object(page_id).map_err(|err| {
            BinderyError::Pdf(format!("cannot read page object {:?}: {}", page_id, err))
        })?;

        let cloned = self.import_object(target, page_object)?;
        let new_id = target.add_object(cloned);
        attach_to_page_tree(target, new_id)
    }

    /// Resolve a reference in the source and import its referent, reusing the
    /// mapping when the same source object was imported before.
    fn import_reference(
        &mut self,
        target: &mut Document,
        id: ObjectId,
    ) -> Result<Object, BinderyError> {
        if let Some(&mapped) = self.imported.get(&id) {
            return Ok(Object::Reference(mapped));
        }

        let source = self.source;
        let referenced = match source.get_object(id) {
            Ok(object) => object,
            Err(err) => {
                warn!(?id, %err, "Cannot resolve reference, using Null");
                return Ok(Object::Null);
            }
        };

        // Reserve the target id before descending so a reference cycle closes
        // onto the reserved id instead of recursing forever.
        let new_id = target.new_object_id();
        self.imported.insert(id, new_id);
        let cloned = self.import_object(target, referenced)?;
        target.objects.insert(new_id, cloned);
        Ok(Object::Reference(new_id))
    }

    /// Structurally clone an object, importing everything it references.
    ///
    /// /Parent entries are dropped; `attach_to_page_tree` points the imported
    /// page at the target's page tree instead.
    fn import_object(
        &mut self,
        target: &mut Document,
        object: &Object,
    ) -> Result<Object, BinderyError> {
        match object {
            Object::Dictionary(dict) => {
                Ok(Object::Dictionary(self.import_dictionary(target, dict)?))
            }
            Object::Array(array) => {
                let mut cloned = Vec::with_capacity(array.len());
                for item in array {
                    cloned.push(self.import_object(target, item)?);
                }
                Ok(Object::Array(cloned))
            }
            Object::Reference(id) => self.import_reference(target, *id),
            Object::Stream(stream) => {
                let dict = self.import_dictionary(target, &stream.dict)?;
                Ok(Object::Stream(Stream::new(dict, stream.content.clone())))
            }
            // Boolean, Integer, Real, String, Name, Null are plain values.
            other => Ok(other.clone()),
        }
    }

    fn import_dictionary(
        &mut self,
        target: &mut Document,
        dict: &Dictionary,
    ) -> Result<Dictionary, BinderyError> {
        let mut cloned = Dictionary::new();
        for (key, value) in dict.iter() {
            if key == b"Parent" {
                continue;
            }
            cloned.set(key.clone(), self.import_object(target, value)?);
        }
        Ok(cloned)
    }
}

/// Append an imported page object to the target's /Pages node and point the
/// page's /Parent back at that node.
fn attach_to_page_tree(target: &mut Document, page_id: ObjectId) -> Result<(), BinderyError> {
    let pages_id = page_tree_root(target)?;

    if let Ok(Object::Dictionary(pages)) = target.get_object_mut(pages_id) {
        if let Ok(Object::Array(kids)) = pages.get_mut(b"Kids") {
            kids.push(Object::Reference(page_id));
        }
        if let Ok(Object::Integer(count)) = pages.get_mut(b"Count") {
            *count += 1;
        }
    }

    if let Ok(Object::Dictionary(page)) = target.get_object_mut(page_id) {
        page.set("Parent", Object::Reference(pages_id));
    }

    Ok(())
}

/// Resolve the /Pages reference out of the target's catalog.
fn page_tree_root(target: &Document) -> Result<ObjectId, BinderyError> {
    let catalog = target
        .catalog()
        .map_err(|err| BinderyError::Pdf(format!("no catalog: {}", err)))?;
    match catalog.get(b"Pages") {
        Ok(Object::Reference(id)) => Ok(*id),
        Ok(_) => Err(BinderyError::Pdf("/Pages is not a reference".to_string())),
        Err(err) => Err(BinderyError::Pdf(format!("no /Pages: {}", err))),
    }
}
