use yew::prelude::*;

/// Which entry, if any, is expanded. At most one at a time.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Accordion {
    pub selected: Option<usize>,
}

impl Accordion {
    /// Clicking the open entry closes it; clicking any other opens it and
    /// collapses the rest.
    pub fn toggle(self, index: usize) -> Self {
        let selected = match self.selected {
            Some(open) if open == index => None,
            _ => Some(index),
        };
        Accordion { selected }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let state = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let expanded = state.is_expanded(index);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set(state.toggle(index));
                    })
                };
                let icon = if expanded { "fas fa-chevron-down" } else { "fas fa-question-circle" };
                html! {
                    <div class={classes!("faq-item", expanded.then(|| "open"))}>
                        <h3 class="faq-question" style="cursor: pointer;" onclick={onclick}>
                            <i class={icon}></i>{" "}{&entry.question}
                        </h3>
                        <p class="faq-answer" style={if expanded { "display: block;" } else { "display: none;" }}>
                            {&entry.answer}
                        </p>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_all(clicks: &[usize]) -> Accordion {
        clicks.iter().fold(Accordion::default(), |acc, &i| acc.toggle(i))
    }

    #[test]
    fn starts_collapsed() {
        let acc = Accordion::default();
        assert!((0..5).all(|i| !acc.is_expanded(i)));
    }

    #[test]
    fn opening_one_closes_the_others() {
        let acc = click_all(&[0, 2]);
        assert!(!acc.is_expanded(0));
        assert!(acc.is_expanded(2));
    }

    #[test]
    fn clicking_open_entry_closes_it() {
        assert_eq!(click_all(&[1, 1]).selected, None);
        assert_eq!(click_all(&[1, 1, 1]).selected, Some(1));
    }

    #[test]
    fn at_most_one_open_and_it_is_the_last_clicked() {
        let sequences: [&[usize]; 5] = [
            &[0, 1, 2, 3],
            &[3, 3, 0],
            &[2, 0, 0, 2, 2],
            &[4, 1, 4, 1, 1],
            &[],
        ];
        for seq in sequences {
            let acc = click_all(seq);
            let open: Vec<usize> = (0..5).filter(|&i| acc.is_expanded(i)).collect();
            assert!(open.len() <= 1);

            // Expected: last clicked, unless it toggled itself closed.
            let mut expected = None;
            for &i in seq {
                expected = if expected == Some(i) { None } else { Some(i) };
            }
            assert_eq!(acc.selected, expected, "sequence {:?}", seq);
        }
    }
}
