use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::detection::domain::object_detector::ObjectDetector;

#[derive(Error, Debug)]
pub enum ClassifierSetError {
    #[error("failed to load classifier {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: Box<dyn std::error::Error>,
    },
    #[error("no classifiers loaded")]
    Empty,
}

/// Ordered, non-empty collection of loaded detectors.
///
/// Built once at startup; either every configured model loads or the set
/// is not created at all.
pub struct ClassifierSet {
    detectors: Vec<Box<dyn ObjectDetector>>,
}

impl ClassifierSet {
    /// Loads each path in order, stopping at the first failure.
    pub fn load<F>(paths: &[PathBuf], mut loader: F) -> Result<Self, ClassifierSetError>
    where
        F: FnMut(&Path) -> Result<Box<dyn ObjectDetector>, Box<dyn std::error::Error>>,
    {
        let mut detectors = Vec::with_capacity(paths.len());
        for path in paths {
            let detector = loader(path).map_err(|source| ClassifierSetError::Load {
                path: path.clone(),
                source,
            })?;
            log::info!("Loaded classifier {}", detector.name());
            detectors.push(detector);
        }
        Self::from_detectors(detectors)
    }

    pub fn from_detectors(
        detectors: Vec<Box<dyn ObjectDetector>>,
    ) -> Result<Self, ClassifierSetError> {
        if detectors.is_empty() {
            return Err(ClassifierSetError::Empty);
        }
        Ok(Self { detectors })
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Detectors in configuration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ObjectDetector>> {
        self.detectors.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gray_frame::GrayFrame;
    use crate::shared::region::Region;

    struct NamedDetector(String);

    impl ObjectDetector for NamedDetector {
        fn name(&self) -> &str {
            &self.0
        }

        fn detect(
            &mut self,
            _image: &GrayFrame,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Ok(Vec::new())
        }
    }

    fn load_named(path: &Path) -> Result<Box<dyn ObjectDetector>, Box<dyn std::error::Error>> {
        Ok(Box::new(NamedDetector(path.display().to_string())))
    }

    #[test]
    fn test_load_preserves_order() {
        let paths = vec![PathBuf::from("faces.xml"), PathBuf::from("eyes.xml")];
        let set = ClassifierSet::load(&paths, load_named).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.names(), vec!["faces.xml", "eyes.xml"]);
    }

    #[test]
    fn test_load_empty_list_fails() {
        let result = ClassifierSet::load(&[], load_named);
        assert!(matches!(result, Err(ClassifierSetError::Empty)));
    }

    #[test]
    fn test_load_stops_at_first_failure() {
        let paths = vec![
            PathBuf::from("ok.xml"),
            PathBuf::from("broken.xml"),
            PathBuf::from("never.xml"),
        ];
        let mut attempted = Vec::new();
        let result = ClassifierSet::load(&paths, |path| {
            attempted.push(path.to_path_buf());
            if path == Path::new("broken.xml") {
                Err("bad cascade".into())
            } else {
                load_named(path)
            }
        });

        match result {
            Err(ClassifierSetError::Load { path, source }) => {
                assert_eq!(path, PathBuf::from("broken.xml"));
                assert_eq!(source.to_string(), "bad cascade");
            }
            _ => panic!("expected load failure"),
        }
        assert_eq!(attempted.len(), 2);
    }

    #[test]
    fn test_load_error_message_names_file() {
        let err = ClassifierSet::load(&[PathBuf::from("x.xml")], |_| Err("boom".into()))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "failed to load classifier x.xml: boom");
    }
}
