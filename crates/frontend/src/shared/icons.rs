use leptos::prelude::*;

/// Icon names the backend may put on a menu, plus the ones the chrome uses.
/// Anything else renders [`FALLBACK`].
const ICONS: &[(&str, &str)] = &[
    ("home", r#"<path d="M3 10.5 12 3l9 7.5"/><path d="M5 9.5V21h14V9.5"/><path d="M10 21v-6h4v6"/>"#),
    ("building", r#"<path d="M3 22h18"/><path d="M6 22V3h12v19"/><path d="M10 7h1M13 7h1M10 11h1M13 11h1M10 15h1M13 15h1"/>"#),
    ("apartment", r#"<path d="M3 22h18"/><path d="M6 22V8l6-5 6 5v14"/><rect x="9" y="13" width="6" height="9"/>"#),
    ("door", r#"<path d="M5 22V3h11v19"/><path d="M3 22h16"/><circle cx="13" cy="13" r="1"/>"#),
    ("users", r#"<path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#),
    ("user", r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#),
    ("gauge", r#"<path d="M12 14l4-4"/><path d="M3.34 19a10 10 0 1 1 17.32 0"/>"#),
    ("receipt", r#"<path d="M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z"/><path d="M14 2v6h6"/><path d="M8 13h8"/><path d="M8 17h5"/>"#),
    ("wallet", r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M2 9h20"/><rect x="6" y="13" width="6" height="3" rx="1"/>"#),
    ("layers", r#"<path d="M12 2 2 7l10 5 10-5-10-5z"/><path d="m2 17 10 5 10-5"/><path d="m2 12 10 5 10-5"/>"#),
    ("settings", r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.82-1.17l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3 13.09H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.17-2.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9.91 3V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 21 9.91H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1.09z"/>"#),
    ("menu", r#"<path d="M3 6h18M3 12h18M3 18h18"/>"#),
    ("plus", r#"<path d="M12 5v14M5 12h14"/>"#),
    ("edit", r#"<path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>"#),
    ("trash", r#"<path d="M3 6h18"/><path d="M19 6l-1 14H6L5 6"/><path d="M10 11v6M14 11v6"/><path d="M9 6V3h6v3"/>"#),
    ("arrow-left", r#"<path d="M19 12H5"/><path d="m12 19-7-7 7-7"/>"#),
    ("save", r#"<path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><path d="M17 21v-8H7v8M7 3v5h8"/>"#),
    ("log-out", r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="m16 17 5-5-5-5"/><path d="M21 12H9"/>"#),
    ("x", r#"<path d="M18 6 6 18M6 6l12 12"/>"#),
    ("alert", r#"<path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><path d="M12 9v4M12 17h.01"/>"#),
    ("chevron-right", r#"<polyline points="9 18 15 12 9 6"/>"#),
    ("chevron-down", r#"<polyline points="6 9 12 15 18 9"/>"#),
];

const FALLBACK: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4l3 3"/>"#;

/// SVG body for `name`. Server icon names are matched case-insensitively.
pub fn icon_markup(name: &str) -> &'static str {
    let name = name.trim();
    ICONS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, markup)| *markup)
        .unwrap_or(FALLBACK)
}

pub fn icon(name: &str) -> AnyView {
    let size = if name.starts_with("chevron") { "16" } else { "20" };
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon_markup(name)
        ></svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_blank_names_fall_back() {
        assert_eq!(icon_markup("no-such-icon"), FALLBACK);
        assert_eq!(icon_markup(""), FALLBACK);
        assert_ne!(icon_markup(" Building "), FALLBACK);
    }
}
