use crate::class_list;
use crate::variants::GridColumns;
use dioxus::prelude::*;
use ocean_domain::content::TeamMember;

#[component]
pub fn TeamCard(member: TeamMember, #[props(default, into)] class: String) -> Element {
    let classes = class_list(["team-card", "card-solid", "card-hover", class.as_str()]);

    rsx! {
        div { class: "{classes}",
            div { class: "team-icon", {member.icon} }
            h3 { class: "team-name text-accent", {member.name} }
            p { class: "team-role text-primary", {member.role} }
            ul { class: "team-duties text-secondary",
                for duty in member.responsibilities {
                    li { "• {duty}" }
                }
            }
        }
    }
}

/// One [`TeamCard`] per member, in the given order.
#[component]
pub fn TeamGrid(
    members: &'static [TeamMember],
    #[props(default)] columns: GridColumns,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["grid", "grid-wide", columns.class(), class.as_str()]);

    rsx! {
        div { class: "{classes}",
            for (index, member) in members.iter().enumerate() {
                TeamCard { key: "{index}", member: *member }
            }
        }
    }
}
