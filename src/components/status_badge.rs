use leptos::prelude::*;

/// Reachability of the service or one of its model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Up,
    Down,
    Unknown,
}

impl Availability {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Availability::Up
        } else {
            Availability::Down
        }
    }

    /// `None` while no answer has come back yet.
    pub fn from_check(result: Option<bool>) -> Self {
        result.map_or(Availability::Unknown, Self::from_flag)
    }

    fn icon_and_class(self) -> (&'static str, &'static str) {
        match self {
            Availability::Up => ("\u{2713}", "status-badge status-pass"),
            Availability::Down => ("\u{2717}", "status-badge status-fail"),
            Availability::Unknown => ("?", "status-badge status-unknown"),
        }
    }
}

#[component]
pub fn StatusBadge(
    /// Row label, e.g. "openai"
    #[prop(into)]
    label: String,
    status: Availability,
    /// Optional detail text, e.g. "Yapılandırılmış"
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    let (icon, class) = status.icon_and_class();

    view! {
        <div class="health-item">
            <span class=class>{icon}</span>
            <span class="health-name">{label}</span>
            <span class="health-detail">{detail.unwrap_or_default()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_from_flag() {
        assert_eq!(Availability::from_flag(true), Availability::Up);
        assert_eq!(Availability::from_flag(false), Availability::Down);
    }

    #[test]
    fn test_unchecked_is_unknown() {
        assert_eq!(Availability::from_check(None), Availability::Unknown);
        assert_eq!(Availability::from_check(Some(true)), Availability::Up);
        assert_eq!(Availability::from_check(Some(false)), Availability::Down);
        assert_eq!(Availability::Unknown.icon_and_class().1, "status-badge status-unknown");
    }
}
