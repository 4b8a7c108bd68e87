use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use shelf_pack::Bin;
use thiserror::Error;

/// A list of bins to pack, along with the canvas to pack them into.
///
/// Read from a TOML file, or a JSON file with the same structure:
///
/// ```toml
/// [canvas]
/// width = 64
/// height = 64
/// auto-resize = false
///
/// [[bins]]
/// id = 1
/// w = 10
/// h = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BinList {
    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub bins: Vec<BinConfig>,

    /// The path that this list came from.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl BinList {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BinListError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let mut bin_list = if is_json {
            Self::from_json(&contents).map_err(|source| BinListError::Json {
                path: path.to_owned(),
                source,
            })?
        } else {
            Self::from_toml(&contents).map_err(|source| BinListError::Toml {
                path: path.to_owned(),
                source,
            })?
        };

        bin_list.file_path = path.to_owned();
        log::trace!(
            "Read {} bins from {}",
            bin_list.bins.len(),
            bin_list.file_path.display()
        );

        Ok(bin_list)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn to_bins(&self) -> Vec<Bin> {
        self.bins.iter().map(BinConfig::to_bin).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Whether the canvas should grow when it runs out of room.
    #[serde(default)]
    pub auto_resize: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            auto_resize: false,
        }
    }
}

fn default_canvas_size() -> u32 {
    64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BinConfig {
    /// An optional identifier for the bin. Bins without one are numbered by
    /// the packer.
    #[serde(default)]
    pub id: Option<u32>,

    pub w: u32,
    pub h: u32,
}

impl BinConfig {
    pub fn to_bin(&self) -> Bin {
        match self.id {
            Some(id) => Bin::with_id(id, (self.w, self.h)),
            None => Bin::new((self.w, self.h)),
        }
    }
}

#[derive(Debug, Error)]
pub enum BinListError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{source} in {}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    use shelf_pack::BinId;

    #[test]
    fn toml_bin_list() {
        let bin_list = BinList::from_toml(
            r#"
            [canvas]
            width = 128
            auto-resize = true

            [[bins]]
            id = 3
            w = 10
            h = 12

            [[bins]]
            w = 4
            h = 4
            "#,
        )
        .unwrap();

        assert_eq!(
            bin_list.canvas,
            CanvasConfig {
                width: 128,
                height: 64,
                auto_resize: true,
            }
        );

        let bins = bin_list.to_bins();
        assert_eq!(bins[0].id(), Some(BinId::new(3)));
        assert_eq!(bins[0].size(), (10, 12));
        assert_eq!(bins[1].id(), None);
        assert_eq!(bins[1].size(), (4, 4));
    }

    #[test]
    fn json_bin_list() {
        let bin_list = BinList::from_json(r#"{ "bins": [{ "w": 1, "h": 2 }] }"#).unwrap();

        assert_eq!(bin_list.canvas, CanvasConfig::default());
        assert_eq!(
            bin_list.bins,
            vec![BinConfig {
                id: None,
                w: 1,
                h: 2
            }]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(BinList::from_toml("[[bins]]\nw = 1\nh = 1\ndepth = 1\n").is_err());
        assert!(BinList::from_json(r#"{ "sprites": [] }"#).is_err());
    }

    #[test]
    fn read_from_file_uses_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("bins.toml");
        fs::write(&toml_path, "[[bins]]\nw = 5\nh = 6\n").unwrap();
        let from_toml = BinList::read_from_file(&toml_path).unwrap();
        assert_eq!(from_toml.bins.len(), 1);
        assert_eq!(from_toml.file_path, toml_path);

        let json_path = dir.path().join("bins.json");
        fs::write(&json_path, r#"{ "bins": [{ "w": 5, "h": 6 }] }"#).unwrap();
        let from_json = BinList::read_from_file(&json_path).unwrap();
        assert_eq!(from_json.bins, from_toml.bins);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = BinList::read_from_file(dir.path().join("nope.toml"));

        match result {
            Err(BinListError::Io { source }) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound)
            }
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}
