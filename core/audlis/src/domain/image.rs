//! ブランド画像の生成リクエストと成果物

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::error::Error;

/// 利用者の入力に関係なく見た目を揃えるための固定の前置き
pub const HOUSE_STYLE: &str = "Professional premium 3D brand motif. \
Aesthetic: Monolith-A architecture, layered glass facets, brushed silver metal, deep navy depth. \
Strictly NO text, NO letters. \
Visual: Studio lighting, sharp edges, refractive glass surfaces, dramatic soft shadows, centered composition.";

/// スタイル指定が空のときに使う文脈
pub const DEFAULT_CONTEXT: &str = "Geometric 3D glass motif";

const DEFAULT_MIME: &str = "image/png";

/// 既定のスタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    GlassFracture,
    BrushedAluminum,
    LiquidMercury,
}

impl StylePreset {
    pub const ALL: [StylePreset; 3] = [
        StylePreset::GlassFracture,
        StylePreset::BrushedAluminum,
        StylePreset::LiquidMercury,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == s.trim())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GlassFracture => "glass-fracture",
            Self::BrushedAluminum => "brushed-aluminum",
            Self::LiquidMercury => "liquid-mercury",
        }
    }

    pub fn context(&self) -> &'static str {
        match self {
            Self::GlassFracture => "Abstract shattered glass sculpture, sharp translucent edges, navy and silver lighting",
            Self::BrushedAluminum => "Industrial precision brushed metal, complex mechanical geometry, soft raytraced shadows",
            Self::LiquidMercury => "Flowing molten silver, high reflectivity, dark obsidian floor, minimalist abstract",
        }
    }
}

/// 画像モデルに送るプロンプト
pub fn compose_prompt(context: &str) -> String {
    let context = match context.trim() {
        "" => DEFAULT_CONTEXT,
        c => c,
    };
    format!("{}\nSpecific Aesthetic Context: {}", HOUSE_STYLE, context)
}

/// 生成された画像（data URI）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset(String);

impl ImageAsset {
    /// base64 データから data URI を組み立てる（MIME 不明時は image/png）
    pub fn from_inline(mime_type: Option<&str>, base64_data: &str) -> Self {
        let mime = mime_type.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_MIME);
        Self(format!("data:{};base64,{}", mime, base64_data))
    }

    pub fn data_uri(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or(DEFAULT_MIME)
    }

    /// data URI のペイロードを復号してバイト列にする
    pub fn decode(&self) -> Result<Vec<u8>, Error> {
        let (_, data) = self
            .0
            .split_once(";base64,")
            .ok_or_else(|| Error::invalid_argument("Image asset is not a base64 data URI"))?;
        STANDARD
            .decode(data.trim())
            .map_err(|e| Error::json(format!("Invalid base64 image data: {}", e)))
    }
}
