use crate::class_list;
use crate::variants::GridColumns;
use dioxus::prelude::*;
use ocean_domain::content::Stat;

#[component]
pub fn StatCard(
    stat: Stat,
    #[props(default = true)] gradient: bool,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list([
        "stat-card",
        if gradient { "card-gradient" } else { "card-solid" },
        class.as_str(),
    ]);

    rsx! {
        div { class: "{classes}",
            if let Some(icon) = stat.icon {
                div { class: "stat-icon", {icon} }
            }
            div { class: "stat-value text-accent", {stat.value} }
            div { class: "stat-label text-primary", {stat.label} }
            if let Some(sublabel) = stat.sublabel {
                div { class: "stat-sublabel text-secondary", {sublabel} }
            }
        }
    }
}

/// One [`StatCard`] per stat, in the given order.
#[component]
pub fn StatsGrid(
    stats: &'static [Stat],
    #[props(default = GridColumns::Four)] columns: GridColumns,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["grid", columns.class(), class.as_str()]);

    rsx! {
        div { class: "{classes}",
            for (index, stat) in stats.iter().enumerate() {
                StatCard { key: "{index}", stat: *stat }
            }
        }
    }
}
