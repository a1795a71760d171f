use blogkit_core::TocEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TableOfContentsProps {
    pub title: AttrValue,
    pub entries: Vec<TocEntry>,
}

/// Flat list of heading links; the level class lets the stylesheet indent `h3` items.
#[function_component(TableOfContents)]
pub fn table_of_contents(props: &TableOfContentsProps) -> Html {
    html! {
        <>
            <h4>{ props.title.clone() }</h4>
            <ul>
                { for props.entries.iter().map(|entry| html! {
                    <li class={entry.level.class()}>
                        <a href={entry.href()}>{ entry.text.clone() }</a>
                    </li>
                }) }
            </ul>
        </>
    }
}
