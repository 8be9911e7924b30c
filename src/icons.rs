use serde::{Deserialize, Serialize};

/// Stroke glyphs drawn on a 24x24 grid, rendered as inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Mail,
    Phone,
    Github,
    Linkedin,
    Server,
    Code,
    Database,
    Cloud,
    Globe,
    Smartphone,
    ChevronDown,
    Menu,
    Close,
}

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Mail,
        Icon::Phone,
        Icon::Github,
        Icon::Linkedin,
        Icon::Server,
        Icon::Code,
        Icon::Database,
        Icon::Cloud,
        Icon::Globe,
        Icon::Smartphone,
        Icon::ChevronDown,
        Icon::Menu,
        Icon::Close,
    ];

    /// SVG path data, one entry per `<path>`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Server => &[
                "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                "M6 6h.01",
                "M6 18h.01",
            ],
            Self::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Self::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Self::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            Self::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }

    /// Text shown next to or instead of the glyph.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mail => "Email",
            Self::Phone => "Teléfono",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Server => "Servidor",
            Self::Code => "Código",
            Self::Database => "Base de datos",
            Self::Cloud => "Cloud",
            Self::Globe => "Web",
            Self::Smartphone => "Móvil",
            Self::ChevronDown => "Bajar",
            Self::Menu => "Abrir menú",
            Self::Close => "Cerrar menú",
        }
    }
}
