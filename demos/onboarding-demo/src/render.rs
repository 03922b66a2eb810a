use onboarding_core::prelude::*;

fn bar(progress: f32, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn option_line(row: &OptionRow) -> String {
    let mark = if row.selected {
        "[x]"
    } else if row.enabled {
        "[ ]"
    } else {
        " - "
    };
    format!("  {mark} {} {}", row.glyph, row.title)
}

pub fn screen(screen: &Screen) -> String {
    let mut out = String::new();
    match screen {
        Screen::Welcome { title, subtitle } => {
            out.push_str(&format!("== {title} ==\n{subtitle}\n"));
        }
        Screen::Profession { title, options } => {
            out.push_str(&format!("== {title} ==\n"));
            for row in options {
                out.push_str(&option_line(row));
                out.push('\n');
            }
        }
        Screen::Interests {
            title,
            options,
            selected,
            max,
        } => {
            out.push_str(&format!("== {title} ({selected}/{max}) ==\n"));
            for row in options {
                out.push_str(&option_line(row));
                out.push('\n');
            }
        }
        Screen::Loading {
            steps,
            progress,
            caption,
        } => {
            out.push_str(&format!("{} {:>3.0}%\n", bar(*progress, 24), progress * 100.0));
            for step in steps {
                let mark = match step.status {
                    StepStatus::Done => "✓",
                    StepStatus::Active => "…",
                    StepStatus::Pending => " ",
                };
                out.push_str(&format!("  {mark} {}\n", step.label));
            }
            if let Some(c) = caption {
                out.push_str(&format!("  {c}\n"));
            }
        }
        Screen::AllSet {
            title,
            profession,
            interests,
        } => {
            out.push_str(&format!(
                "== {title} ==\n  {profession} · {}\n",
                interests.join(", ")
            ));
        }
        Screen::Closed => out.push_str("(closed)\n"),
    }
    out
}

pub fn chrome(chrome: &Chrome) -> String {
    let (page, count) = chrome.indicator;
    let dots: String = (0..count)
        .map(|i| if i == page { '●' } else { '○' })
        .collect();
    let primary = if chrome.primary_enabled {
        format!("<{}>", chrome.primary_label)
    } else {
        format!("({})", chrome.primary_label)
    };
    let back = if chrome.show_back {
        format!("<{}> ", chrome.back_label)
    } else {
        String::new()
    };
    let skip = if chrome.show_skip {
        format!(" <{}>", chrome.skip_label)
    } else {
        String::new()
    };
    format!("{dots}   {back}{primary}{skip}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_clamped() {
        assert_eq!(bar(0.0, 4), "[----]");
        assert_eq!(bar(0.5, 4), "[##--]");
        assert_eq!(bar(2.0, 4), "[####]");
    }

    #[test]
    fn disabled_rows_have_no_checkbox() {
        let row = OptionRow {
            glyph: "🎮".into(),
            title: "Gaming".into(),
            selected: false,
            enabled: false,
        };
        assert_eq!(option_line(&row), "   -  🎮 Gaming");
    }

    #[test]
    fn chrome_line_uses_labels() {
        let c = Chrome {
            indicator: (1, 3),
            show_back: true,
            back_label: "Zurück".into(),
            show_skip: true,
            skip_label: "Überspringen".into(),
            primary_label: "Weiter".into(),
            primary_enabled: false,
        };
        assert_eq!(chrome(&c), "○●○   <Zurück> (Weiter) <Überspringen>\n");
    }
}
