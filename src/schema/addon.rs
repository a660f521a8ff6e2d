use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The auxiliary text blocks a brief can carry.
///
/// Variant order is the fixed presentation order; the add-on map in a
/// generated brief is keyed by this type so iteration follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddOnKind {
    Voiceover,
    Dialogue,
    Thumbnail,
    CaptionsTags,
    Music,
}

impl AddOnKind {
    pub const ALL: [AddOnKind; 5] = [
        Self::Voiceover,
        Self::Dialogue,
        Self::Thumbnail,
        Self::CaptionsTags,
        Self::Music,
    ];

    /// Key used in serialized output, e.g. "captionsTags".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Voiceover => "voiceover",
            Self::Dialogue => "dialogue",
            Self::Thumbnail => "thumbnail",
            Self::CaptionsTags => "captionsTags",
            Self::Music => "music",
        }
    }
}

impl fmt::Display for AddOnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown add-on '{0}' (expected voiceover, dialogue, thumbnail, captions or music)")]
pub struct UnknownAddOn(pub String);

impl FromStr for AddOnKind {
    type Err = UnknownAddOn;

    /// Accepts the serialized key plus a few spellings a person would type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "voiceover" | "vo" => Ok(Self::Voiceover),
            "dialogue" | "dialog" => Ok(Self::Dialogue),
            "thumbnail" | "thumb" => Ok(Self::Thumbnail),
            "captionstags" | "captions" | "tags" | "captions_tags" => Ok(Self::CaptionsTags),
            "music" => Ok(Self::Music),
            _ => Err(UnknownAddOn(s.to_string())),
        }
    }
}

/// Which add-on blocks to produce. All flags default to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOnConfig {
    pub voiceover: bool,
    pub dialogue: bool,
    pub thumbnail: bool,
    pub captions_tags: bool,
    pub music: bool,
}

impl AddOnConfig {
    /// Every flag enabled.
    pub fn all() -> Self {
        Self {
            voiceover: true,
            dialogue: true,
            thumbnail: true,
            captions_tags: true,
            music: true,
        }
    }

    /// Builder-style: return a copy with `kind` enabled.
    pub fn with(mut self, kind: AddOnKind) -> Self {
        self.set(kind, true);
        self
    }

    pub fn is_enabled(&self, kind: AddOnKind) -> bool {
        match kind {
            AddOnKind::Voiceover => self.voiceover,
            AddOnKind::Dialogue => self.dialogue,
            AddOnKind::Thumbnail => self.thumbnail,
            AddOnKind::CaptionsTags => self.captions_tags,
            AddOnKind::Music => self.music,
        }
    }

    pub fn set(&mut self, kind: AddOnKind, enabled: bool) {
        let flag = match kind {
            AddOnKind::Voiceover => &mut self.voiceover,
            AddOnKind::Dialogue => &mut self.dialogue,
            AddOnKind::Thumbnail => &mut self.thumbnail,
            AddOnKind::CaptionsTags => &mut self.captions_tags,
            AddOnKind::Music => &mut self.music,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, kind: AddOnKind) {
        self.set(kind, !self.is_enabled(kind));
    }

    /// Enabled kinds in presentation order.
    pub fn enabled(&self) -> impl Iterator<Item = AddOnKind> + '_ {
        AddOnKind::ALL
            .into_iter()
            .filter(move |kind| self.is_enabled(*kind))
    }
}

impl FromIterator<AddOnKind> for AddOnConfig {
    fn from_iter<I: IntoIterator<Item = AddOnKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AddOnConfig::default(), |config, kind| config.with(kind))
    }
}
