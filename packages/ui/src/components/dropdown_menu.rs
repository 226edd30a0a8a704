use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu;

/// Menu that closes on outside click or Escape and supports arrow-key navigation.
#[component]
pub fn DropdownMenu(children: Element) -> Element {
    rsx! {
        dropdown_menu::DropdownMenu {
            class: "dropdown-menu",
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuTrigger(#[props(default)] title: String, children: Element) -> Element {
    rsx! {
        dropdown_menu::DropdownMenuTrigger {
            class: "dropdown-menu-trigger",
            title: "{title}",
            aria_label: "{title}",
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuContent(children: Element) -> Element {
    rsx! {
        dropdown_menu::DropdownMenuContent {
            class: "dropdown-menu-content",
            {children}
        }
    }
}

/// One entry. `index` is its position for keyboard focus order.
#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    value: T,
    index: usize,
    #[props(default)] danger: bool,
    on_select: EventHandler<T>,
    children: Element,
) -> Element {
    let class = if danger {
        "dropdown-menu-item dropdown-menu-item-danger"
    } else {
        "dropdown-menu-item"
    };

    rsx! {
        dropdown_menu::DropdownMenuItem::<T> {
            class,
            value: value.clone(),
            index,
            on_select: move |v: T| on_select.call(v),
            {children}
        }
    }
}
