//! TUI rendering traits for eventdeck view models.
//!
//! Extension traits that turn the headless view models from
//! eventdeck-core into colored terminal text using owo_colors.

use eventdeck_core::catalog::AccentColor;
use eventdeck_core::view::{
    CapacityTier, EventCard, EventDetail, FilterBar, FilterOption, PickerLabel, RsvpBadge, RsvpControl, Summary,
    TabView, Venue,
};
use owo_colors::{AnsiColors, OwoColorize};

/// Width of the capacity bar in cells
const BAR_WIDTH: usize = 24;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn ansi(color: AccentColor) -> AnsiColors {
    match color {
        AccentColor::Blue => AnsiColors::Blue,
        AccentColor::Cyan => AnsiColors::Cyan,
        AccentColor::Green => AnsiColors::Green,
        AccentColor::Yellow => AnsiColors::Yellow,
        AccentColor::Red => AnsiColors::Red,
        AccentColor::Magenta => AnsiColors::Magenta,
        AccentColor::Gray => AnsiColors::BrightBlack,
    }
}

impl Render for TabView {
    fn render(&self) -> String {
        let text = format!("{} {} ({})", self.tab.emoji(), self.tab.label(), self.count);
        if self.active {
            text.bold().cyan().to_string()
        } else {
            text.dimmed().to_string()
        }
    }
}

impl Render for FilterOption {
    fn render(&self) -> String {
        let text = match self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.label),
            None => self.label.to_string(),
        };
        if self.selected {
            format!("[{}]", text).color(ansi(self.colors.0)).bold().to_string()
        } else {
            text.dimmed().to_string()
        }
    }
}

impl Render for FilterBar {
    fn render(&self) -> String {
        let join = |options: &[FilterOption]| options.iter().map(|o| o.render()).collect::<Vec<_>>().join("  ");

        format!(
            "   {}  {}\n   {}  {}",
            "Tipo".dimmed(),
            join(&self.types),
            "Categoría".dimmed(),
            join(&self.categories)
        )
    }
}

impl Render for RsvpBadge {
    fn render(&self) -> String {
        match self {
            RsvpBadge::Going => self.text().green().to_string(),
            RsvpBadge::Interested => self.text().yellow().to_string(),
        }
    }
}

impl Render for EventCard {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let mut header = format!(
            "{} {}",
            self.cover_emoji,
            self.title.bold().color(ansi(self.type_info.colors.0))
        );
        if self.is_featured {
            header.push_str(&format!("  {}", "⭐ Destacado".yellow()));
        }
        lines.push(header);

        let mut badges = format!(
            "   {} {}  {} {}",
            self.type_info.emoji, self.type_info.label, self.category_info.emoji, self.category_info.label
        );
        if self.is_recurring {
            badges.push_str(&format!("  {}", "🔄 Recurrente".magenta()));
        }
        if let Some(days) = &self.days_badge {
            badges.push_str(&format!("  {}", days.cyan()));
        }
        lines.push(badges);

        lines.push(format!("   📅 {} • 🕐 {}", self.date, self.time).dimmed().to_string());

        let place_icon = if self.is_virtual { "💻" } else { "📍" };
        lines.push(format!("   {} {}", place_icon, self.place).dimmed().to_string());

        let mut footer = format!("   {}", self.speaker_avatars.join(""));
        if !self.speaker_avatars.is_empty() {
            footer.push(' ');
        }
        footer.push_str(&format!("{} asistentes", self.attendees).dimmed().to_string());
        if let Some(badge) = &self.rsvp_badge {
            footer.push_str(&format!("  {}", badge.render()));
        }
        lines.push(footer);

        lines.push(format!("   {}", format!("id: {}", self.id).dimmed()));

        lines.join("\n")
    }
}

impl Render for Summary {
    fn render(&self) -> String {
        format!(
            "📊 Resumen de Eventos\n   {} {}  {} {}  {} {}  {} {}",
            self.virtual_count.to_string().blue().bold(),
            "💻 Virtuales".dimmed(),
            self.presential_count.to_string().green().bold(),
            "📍 Presenciales".dimmed(),
            self.hybrid_count.to_string().magenta().bold(),
            "🔄 Híbridos".dimmed(),
            self.total.to_string().yellow().bold(),
            "📅 Total".dimmed(),
        )
    }
}

/// The RSVP control of one event. Action hints carry the event id so they
/// can be copied as-is.
pub fn render_rsvp_control(control: &RsvpControl, event_id: &str) -> String {
    match control {
        RsvpControl::Confirmed { reminder } => {
            let bell = if *reminder {
                format!("🔔 {}", RsvpControl::reminder_title(true)).yellow().to_string()
            } else {
                format!("🔕 {}", RsvpControl::reminder_title(false)).dimmed().to_string()
            };
            format!(
                "{}  {}\n   {}",
                "✅ ¡Inscrito!".green().bold(),
                bell,
                format!("Cancelar inscripción: eventdeck cancel {}", event_id).dimmed()
            )
        }
        RsvpControl::Picker { label, disabled, options, .. } => {
            let mut lines = Vec::new();
            let label_text = match label {
                PickerLabel::Full => label.text().dimmed().to_string(),
                PickerLabel::Interested => label.text().yellow().to_string(),
                PickerLabel::SignUp => label.text().cyan().bold().to_string(),
            };
            lines.push(label_text);
            if !*disabled && options.is_empty() {
                lines.push(
                    format!("   eventdeck rsvp {} [going|interested|not-going]", event_id)
                        .dimmed()
                        .to_string(),
                );
            }
            for option in options {
                lines.push(format!("   {} {}", option.emoji, option.label));
            }
            lines.join("\n")
        }
    }
}

fn render_capacity_bar(percent: f64, tier: CapacityTier) -> String {
    let filled = (((percent / 100.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    match tier {
        CapacityTier::Full => bar.red().to_string(),
        CapacityTier::AlmostFull => bar.yellow().to_string(),
        CapacityTier::Available => bar.green().to_string(),
    }
}

impl Render for EventDetail {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let mut title = format!(
            "{} {}",
            self.cover_emoji,
            self.title.bold().color(ansi(self.type_info.colors.0))
        );
        if self.is_featured {
            title.push_str(&format!("  {}", "⭐ Destacado".yellow()));
        }
        lines.push(title);

        let mut badges = format!(
            "   {} {}  {} {}",
            self.type_info.emoji, self.type_info.label, self.category_info.emoji, self.category_info.label
        );
        if let Some(pattern) = &self.recurrence {
            badges.push_str(&format!("  {}", format!("🔄 {}", pattern).magenta()));
        }
        lines.push(badges);
        lines.push(format!("   {}", self.description.dimmed()));
        lines.push(String::new());

        lines.push(format!("   {}", "Fecha y hora".dimmed()));
        lines.push(format!("   {}", self.full_date.bold()));
        lines.push(format!("   {} - {}", self.start_time, self.end_time));
        lines.push(
            format!("   Duración: {} • {}", self.duration, self.timezone)
                .dimmed()
                .to_string(),
        );
        lines.push(String::new());

        lines.push(format!("   {}", "Ubicación".dimmed()));
        match &self.venue {
            Venue::Virtual { join_url } => {
                lines.push("   💻 Evento virtual".bold().to_string());
                if let Some(url) = join_url {
                    lines.push(format!("   {} {}", "Unirse al evento →".cyan(), url.underline()));
                }
            }
            Venue::Physical { location, also_virtual } => {
                lines.push(format!("   📍 {}", location.as_deref().unwrap_or("")).bold().to_string());
                if *also_virtual {
                    lines.push(format!("   {}", "También disponible virtual".dimmed()));
                }
            }
        }

        if !self.speakers.is_empty() {
            lines.push(String::new());
            lines.push(format!("   {}", "Ponentes".dimmed()));
            for speaker in &self.speakers {
                lines.push(format!(
                    "   {} {} {}",
                    speaker.avatar_emoji,
                    speaker.name.bold(),
                    speaker.role.dimmed()
                ));
            }
        }

        if !self.tags.is_empty() {
            lines.push(String::new());
            let tags: Vec<String> = self.tags.iter().map(|t| format!("#{}", t)).collect();
            lines.push(format!("   {}", tags.join(" ").dimmed()));
        }

        lines.push(String::new());
        let capacity = &self.capacity;
        let mut capacity_line = format!(
            "   {} {}",
            capacity.current.to_string().bold(),
            capacity.caption().dimmed()
        );
        if let Some(bar) = &capacity.bar {
            capacity_line.push_str(&format!(
                "  {} {}",
                render_capacity_bar(bar.percent, bar.tier),
                format!("{} lugares disponibles", bar.remaining).dimmed()
            ));
        }
        lines.push(capacity_line);

        lines.push(String::new());
        lines.push(format!("   {}", render_rsvp_control(&self.rsvp, &self.id).replace('\n', "\n   ")));

        lines.join("\n")
    }
}
