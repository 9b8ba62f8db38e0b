use shared::PaginationButtons;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub buttons: PaginationButtons,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// `disabled` attribute and class list of one button, always in agreement
#[derive(Debug, PartialEq)]
struct ButtonLook {
    disabled: bool,
    class: Classes,
}

impl ButtonLook {
    fn new(disabled: bool) -> Self {
        Self {
            disabled,
            class: classes!("btn", "btn-pagination", disabled.then_some("disabled")),
        }
    }
}

/// Prev/next pair. Disabled buttons get both the attribute and the class.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_previous = {
        let callback = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };
    let on_next = {
        let callback = props.on_next.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let prev = ButtonLook::new(props.buttons.prev_disabled);
    let next = ButtonLook::new(props.buttons.next_disabled);

    html! {
        <div class="pagination">
            <button
                id="prevPage"
                type="button"
                class={prev.class}
                disabled={prev.disabled}
                onclick={on_previous}
            >
                { "Previous" }
            </button>
            <button
                id="nextPage"
                type="button"
                class={next.class}
                disabled={next.disabled}
                onclick={on_next}
            >
                { "Next" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PagePosition;

    #[test]
    fn test_disabled_button_has_attribute_and_class() {
        let look = ButtonLook::new(true);
        assert!(look.disabled);
        assert!(look.class.contains("disabled"));
        assert!(look.class.contains("btn"));
    }

    #[test]
    fn test_enabled_button_has_neither() {
        let look = ButtonLook::new(false);
        assert!(!look.disabled);
        assert!(!look.class.contains("disabled"));
    }

    #[test]
    fn test_looks_follow_page_position() {
        let buttons = PagePosition::derive(0, 100, 100).buttons();
        let prev = ButtonLook::new(buttons.prev_disabled);
        let next = ButtonLook::new(buttons.next_disabled);
        assert!(prev.disabled && prev.class.contains("disabled"));
        assert!(!next.disabled && !next.class.contains("disabled"));
    }
}
