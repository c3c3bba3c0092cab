//! Page sizing for lopdf documents

use crate::classifier::PaperClassifier;
use crate::error::{MediaError, Result};
use crate::media::MediaSizeName;
use crate::registry::MediaSizeRegistry;
use crate::size::{MicrometerSize, Orientation};
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, instrument, trace};

/// Guards against reference cycles in the page tree
const MAX_PARENT_DEPTH: usize = 32;

/// Extension trait for lopdf::Document to size pages by standard media
pub trait PageMedia {
    /// Set a page's MediaBox to a standard media size
    ///
    /// # Arguments
    /// * `page_id` - The object ID of the page
    /// * `name` - Standard media to apply
    /// * `orientation` - Landscape orientations swap width and height
    fn set_page_media(
        &mut self,
        page_id: ObjectId,
        name: MediaSizeName,
        orientation: Orientation,
    ) -> Result<()>;

    /// Like `set_page_media`, with reference sizes taken from `classifier`'s registry
    fn set_page_media_with<R: MediaSizeRegistry>(
        &mut self,
        page_id: ObjectId,
        name: MediaSizeName,
        orientation: Orientation,
        classifier: &PaperClassifier<R>,
    ) -> Result<()>;

    /// Identify the standard media of a page from its MediaBox
    ///
    /// The MediaBox may be inherited from an ancestor Pages node. Returns
    /// `Ok(None)` when the size has no standard equivalent.
    fn page_media(&self, page_id: ObjectId) -> Result<Option<MediaSizeName>>;

    /// Like `page_media`, matching with a specific classifier
    fn page_media_with<R: MediaSizeRegistry>(
        &self,
        page_id: ObjectId,
        classifier: &PaperClassifier<R>,
    ) -> Result<Option<MediaSizeName>>;
}

impl PageMedia for Document {
    fn set_page_media(
        &mut self,
        page_id: ObjectId,
        name: MediaSizeName,
        orientation: Orientation,
    ) -> Result<()> {
        self.set_page_media_with(page_id, name, orientation, &PaperClassifier::new())
    }

    #[instrument(skip(self, classifier))]
    fn set_page_media_with<R: MediaSizeRegistry>(
        &mut self,
        page_id: ObjectId,
        name: MediaSizeName,
        orientation: Orientation,
        classifier: &PaperClassifier<R>,
    ) -> Result<()> {
        let reference = classifier
            .registry()
            .reference_size(name)
            .ok_or(MediaError::MissingReferenceSize(name))?;
        let size = match orientation {
            Orientation::Portrait => reference.to_portrait(),
            Orientation::Landscape | Orientation::ReverseLandscape => reference.to_landscape(),
        };
        let (width, height) = size.to_points();
        debug!("Setting MediaBox of {:?} to {}x{} pt", page_id, width, height);

        let page = match self.get_object_mut(page_id) {
            Ok(Object::Dictionary(page)) => page,
            Ok(_) => {
                return Err(MediaError::InvalidPage(format!(
                    "object {:?} is not a page dictionary",
                    page_id
                )));
            }
            Err(_) => return Err(MediaError::PageNotFound(page_id)),
        };
        page.set(
            "MediaBox",
            vec![0.into(), 0.into(), Object::Real(width), Object::Real(height)],
        );
        Ok(())
    }

    fn page_media(&self, page_id: ObjectId) -> Result<Option<MediaSizeName>> {
        self.page_media_with(page_id, &PaperClassifier::new())
    }

    #[instrument(skip(self, classifier))]
    fn page_media_with<R: MediaSizeRegistry>(
        &self,
        page_id: ObjectId,
        classifier: &PaperClassifier<R>,
    ) -> Result<Option<MediaSizeName>> {
        let media_box = inherited_media_box(self, page_id)?;
        let (width, height) = media_box_extent(&media_box)?;
        trace!("Page {:?} MediaBox is {}x{} pt", page_id, width, height);
        Ok(classifier.match_size(MicrometerSize::from_points(width, height)))
    }
}

/// Find the MediaBox for a page, walking up `Parent` links
fn inherited_media_box(doc: &Document, page_id: ObjectId) -> Result<Vec<Object>> {
    let mut current = page_id;
    for _ in 0..MAX_PARENT_DEPTH {
        let dict = match doc.get_object(current) {
            Ok(Object::Dictionary(dict)) => dict,
            Ok(_) => {
                return Err(MediaError::InvalidPage(format!(
                    "object {:?} is not a dictionary",
                    current
                )));
            }
            Err(_) if current == page_id => return Err(MediaError::PageNotFound(page_id)),
            Err(err) => return Err(err.into()),
        };

        if let Ok(media_box) = dict.get(b"MediaBox") {
            let media_box = match media_box {
                Object::Reference(id) => doc.get_object(*id)?,
                other => other,
            };
            return Ok(media_box.as_array()?.clone());
        }

        match dict.get(b"Parent") {
            Ok(Object::Reference(parent)) => current = *parent,
            _ => break,
        }
    }
    Err(MediaError::InvalidPage(format!(
        "page {:?} has no MediaBox",
        page_id
    )))
}

/// Width and height of a `[llx lly urx ury]` rectangle in points
fn media_box_extent(media_box: &[Object]) -> Result<(f32, f32)> {
    let [llx, lly, urx, ury] = media_box else {
        return Err(MediaError::InvalidPage(format!(
            "MediaBox has {} entries, expected 4",
            media_box.len()
        )));
    };
    let width = (urx.as_float()? - llx.as_float()?).abs();
    let height = (ury.as_float()? - lly.as_float()?).abs();
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    /// A document with one page under a Pages node carrying `pages_box`
    fn document_with_page(pages_box: Vec<Object>, page_box: Option<Vec<Object>>) -> (Document, ObjectId) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
            "MediaBox" => pages_box,
        });
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        };
        if let Some(page_box) = page_box {
            page.set("MediaBox", page_box);
        }
        let page_id = doc.add_object(page);
        if let Ok(Object::Dictionary(pages)) = doc.get_object_mut(pages_id) {
            if let Ok(Object::Array(kids)) = pages.get_mut(b"Kids") {
                kids.push(page_id.into());
            }
            pages.set("Count", Object::Integer(1));
        }
        (doc, page_id)
    }

    fn a4_points() -> Vec<Object> {
        vec![0.into(), 0.into(), 595.into(), 842.into()]
    }

    #[test]
    fn test_page_media_reads_own_media_box() {
        let letter = vec![0.into(), 0.into(), 612.into(), 792.into()];
        let (doc, page_id) = document_with_page(a4_points(), Some(letter));
        assert_eq!(doc.page_media(page_id).unwrap(), Some(MediaSizeName::NaLetter));
    }

    #[test]
    fn test_page_media_inherits_from_parent() {
        let (doc, page_id) = document_with_page(a4_points(), None);
        assert_eq!(doc.page_media(page_id).unwrap(), Some(MediaSizeName::IsoA4));
    }

    #[test]
    fn test_page_media_landscape_box() {
        let landscape = vec![0.into(), 0.into(), 842.into(), 595.into()];
        let (doc, page_id) = document_with_page(landscape, None);
        assert_eq!(doc.page_media(page_id).unwrap(), Some(MediaSizeName::IsoA4));
    }

    #[test]
    fn test_page_media_custom_size() {
        let label = vec![0.into(), 0.into(), 288.into(), 144.into()];
        let (doc, page_id) = document_with_page(label, None);
        assert_eq!(doc.page_media(page_id).unwrap(), None);
    }

    #[test]
    fn test_set_page_media_round_trip() {
        let (mut doc, page_id) = document_with_page(a4_points(), None);
        doc.set_page_media(page_id, MediaSizeName::NaNumber10Envelope, Orientation::Landscape)
            .unwrap();

        let media_box = inherited_media_box(&doc, page_id).unwrap();
        let (width, height) = media_box_extent(&media_box).unwrap();
        assert!((width - 684.0).abs() < 0.01);
        assert!((height - 297.0).abs() < 0.01);
        assert_eq!(
            doc.page_media(page_id).unwrap(),
            Some(MediaSizeName::NaNumber10Envelope)
        );
    }

    #[test]
    fn test_set_page_media_missing_page() {
        let (mut doc, _) = document_with_page(a4_points(), None);
        let err = doc
            .set_page_media((999, 0), MediaSizeName::IsoA4, Orientation::Portrait)
            .unwrap_err();
        assert!(matches!(err, MediaError::PageNotFound((999, 0))));
    }

    #[test]
    fn test_set_page_media_without_reference() {
        let (mut doc, page_id) = document_with_page(a4_points(), None);
        let empty = PaperClassifier::with_registry(|_: MediaSizeName| None::<MicrometerSize>);
        let err = doc
            .set_page_media_with(page_id, MediaSizeName::IsoA4, Orientation::Portrait, &empty)
            .unwrap_err();
        assert!(matches!(err, MediaError::MissingReferenceSize(MediaSizeName::IsoA4)));
    }

    #[test]
    fn test_page_media_missing_page() {
        let (doc, _) = document_with_page(a4_points(), None);
        assert!(matches!(
            doc.page_media((42, 0)),
            Err(MediaError::PageNotFound((42, 0)))
        ));
    }

    #[test]
    fn test_malformed_media_box() {
        let (doc, page_id) = document_with_page(vec![0.into(), 0.into(), 595.into()], None);
        assert!(matches!(doc.page_media(page_id), Err(MediaError::InvalidPage(_))));
    }
}
