mod messages;
mod script;

use std::env;

use anyhow::{bail, Context, Result};
use infiniscroll_core::{Padding, Placement, ScrollView, ScrollViewConfig, Size};

use crate::messages::{conversation, message_pool, Message, MessagePool};
use crate::script::{default_script, Player};

const DEFAULT_ITEMS: usize = 500;
const VIEWPORT: Size = Size {
    width: 360.0,
    height: 640.0,
};

struct Settings {
    items: usize,
    placement: Placement,
}

impl Settings {
    fn from_env() -> Result<Self> {
        let items = match env::var("CHAT_DEMO_ITEMS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("CHAT_DEMO_ITEMS must be a count, got {raw:?}"))?,
            Err(_) => DEFAULT_ITEMS,
        };
        let placement = match env::var("CHAT_DEMO_PLACEMENT").as_deref() {
            Err(_) | Ok("bottom") => Placement::BottomToTop,
            Ok("top") => Placement::TopToBottom,
            Ok(other) => bail!("CHAT_DEMO_PLACEMENT must be `bottom` or `top`, got {other:?}"),
        };
        Ok(Self { items, placement })
    }
}

fn report(view: &ScrollView<Message, MessagePool>, label: &str) {
    let cells = view.visible_cells();
    let first = cells.first().map(|cell| cell.index);
    let last = cells.last().map(|cell| cell.index);
    log::info!(
        "{label}: position {:.1}, {} cells on screen ({first:?}..={last:?}) of {} messages",
        view.scroll_position(),
        cells.len(),
        view.data().len()
    );
    for cell in cells.iter() {
        let item = &view.data()[cell.index];
        log::debug!(
            "  #{:<4} {:?} y={:>7.1} h={:>5.1} id={:?}",
            cell.index,
            item.sender,
            cell.rect.y,
            cell.rect.height,
            cell.view.view().id()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = Settings::from_env()?;
    println!("=== infiniscroll chat demo ===");
    println!(
        "{} messages, {:?}; set RUST_LOG=debug to see every cell",
        settings.items, settings.placement
    );

    let config = ScrollViewConfig {
        placement: settings.placement,
        spacing: 6.0,
        padding: Padding::symmetric(8.0, 12.0),
        ..Default::default()
    };
    let mut view = ScrollView::with_viewport(config, message_pool(), VIEWPORT);
    view.on_scroll_changed(|position| log::trace!("scrolled to {position:.2}"));
    view.set(conversation(settings.items));
    report(&view, "initial");

    let mut player = Player::new(settings.items);
    for step in default_script(settings.placement) {
        player.play(&mut view, step)?;
        report(&view, &format!("after {step:?}"));
    }

    let pool = view.into_pool();
    let kinds: Vec<_> = pool.keys().collect();
    log::info!(
        "finished after {} frames; pooled cell kinds: {kinds:?}",
        player.frames()
    );
    Ok(())
}
