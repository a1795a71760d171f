use blogkit_core::{HeadingLevel, HeadingSource, TocIndex};
use web_sys::Element;
use yew::AttrValue;

use super::Page;
use crate::components::{TableOfContents, TableOfContentsProps};
use crate::dom::{self, WebError};

pub const CONTAINER_CLASS: &str = "table-of-contents";

/// Build the table of contents for the article body.
///
/// Returns the number of entries rendered, or `None` when the page has no
/// article, too few headings, or no paragraph to anchor the list after.
/// Headings still receive their generated ids in that last case.
///
/// # Errors
/// Returns an error if a selector is invalid or the container cannot be inserted.
pub fn mount(page: &Page) -> Result<Option<usize>, WebError> {
    let cfg = &page.config;
    let Some(content) = page.document.query_selector(&cfg.content_selector)? else {
        return Ok(None);
    };

    let (elements, sources): (Vec<Element>, Vec<HeadingSource>) =
        dom::nodes_as::<Element>(&content.query_selector_all(&cfg.toc_heading_selector)?)
            .into_iter()
            .filter_map(|el| {
                let level = HeadingLevel::from_tag(&el.tag_name())?;
                let id = el.id();
                let source = HeadingSource::new(
                    Some(id.as_str()),
                    level,
                    el.text_content().unwrap_or_default(),
                );
                Some((el, source))
            })
            .unzip();

    let min_headings = usize::try_from(cfg.toc_min_headings).unwrap_or(usize::MAX);
    let Some(index) = TocIndex::build_avoiding(&sources, &cfg.toc_id_prefix, min_headings, |id| {
        page.document.get_element_by_id(id).is_some()
    }) else {
        log::debug!("{} headings, table of contents skipped", sources.len());
        return Ok(None);
    };

    for (position, id) in index.assignments() {
        elements[*position].set_id(id);
    }

    let Some(first_paragraph) = content.query_selector("p")? else {
        log::debug!("article has no paragraph to place the table of contents after");
        return Ok(None);
    };
    let container = page.document.create_element("div")?;
    container.set_class_name(CONTAINER_CLASS);
    first_paragraph.after_with_node_1(&container)?;

    yew::Renderer::<TableOfContents>::with_root_and_props(
        container,
        TableOfContentsProps {
            title: AttrValue::from(cfg.toc_title.clone()),
            entries: index.entries().to_vec(),
        },
    )
    .render();
    Ok(Some(index.len()))
}
