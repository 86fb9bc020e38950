use egui::Vec2;
use egui_phosphor::regular as icons;

/// Applications in the dock, in dock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    Resume,
    Projects,
    Professional,
    Timeline,
    Hobbies,
    Personal,
}

impl AppId {
    pub const ALL: [AppId; 6] = [
        AppId::Resume,
        AppId::Projects,
        AppId::Professional,
        AppId::Timeline,
        AppId::Hobbies,
        AppId::Personal,
    ];

    /// Stable key for egui widget ids.
    pub fn key(self) -> &'static str {
        match self {
            AppId::Resume => "resume",
            AppId::Projects => "projects",
            AppId::Professional => "professional",
            AppId::Timeline => "timeline",
            AppId::Hobbies => "hobbies",
            AppId::Personal => "personal",
        }
    }

    /// Label under the dock icon.
    pub fn dock_label(self) -> &'static str {
        match self {
            AppId::Resume => "Resume",
            AppId::Projects => "Projects",
            AppId::Professional => "Professional",
            AppId::Timeline => "Timeline",
            AppId::Hobbies => "Hobbies",
            AppId::Personal => "About Me",
        }
    }

    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            AppId::Professional => "Professional Life",
            other => other.dock_label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppId::Resume => icons::FILE_TEXT,
            AppId::Projects => icons::PRESENTATION,
            AppId::Professional => icons::BRIEFCASE,
            AppId::Timeline => icons::CALENDAR,
            AppId::Hobbies => icons::PALETTE,
            AppId::Personal => icons::USER_CIRCLE,
        }
    }

    /// Windowed size before the 90% width cap.
    pub fn default_size(self) -> Vec2 {
        match self {
            AppId::Resume => Vec2::new(1100.0, 750.0),
            AppId::Timeline => Vec2::new(950.0, 650.0),
            _ => Vec2::new(1000.0, 650.0),
        }
    }
}
