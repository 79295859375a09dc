use crate::domain::model::{Good, GoodType, Pallet, Snapshot};
use std::cmp::{Ordering, Reverse};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub summary: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalletView {
    pub header: String,
    pub items: Vec<ItemView>,
}

/// Both presentations produced from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentViews {
    pub unsorted: Vec<PalletView>,
    pub sorted: Vec<PalletView>,
}

/// Doors first, then taller, then wider. Everything else compares equal.
pub fn compare_goods(a: &Good, b: &Good) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

fn sort_key(good: &Good) -> (bool, Reverse<u32>, Reverse<u32>) {
    (!good.is_door(), Reverse(good.hoehe), Reverse(good.breite))
}

/// Stable in-place sort of one pallet's goods.
pub fn sort_goods(goods: &mut [Good]) {
    goods.sort_by(compare_goods);
}

/// Copy of the pallets with every pallet's goods sorted independently.
pub fn sorted_pallets(pallets: &[Pallet]) -> Vec<Pallet> {
    pallets
        .iter()
        .cloned()
        .map(|mut pallet| {
            sort_goods(&mut pallet.waren);
            pallet
        })
        .collect()
}

fn render_item(index: usize, good: &Good) -> ItemView {
    let summary = format!(
        "{}. Lagerort: {} | Mark: {} | Typ: {}",
        index, good.lagerort, good.mark, good.kind
    );

    let mut details = format!(
        "Richtung: {} | Maße: {} x {}",
        good.richtung, good.breite, good.hoehe
    );
    if good.kind == GoodType::Zarge {
        if let Some(thickness) = good.wandstaerke {
            let _ = write!(details, " | Wandstärke: {}", thickness);
        }
    }
    let _ = write!(details, " | Menge: {}", good.menge);

    ItemView { summary, details }
}

fn render_pallet(index: usize, pallet: &Pallet) -> PalletView {
    PalletView {
        header: format!(
            "Pallet #{} - Kunde: {} - Gesamtgewicht: {} kg",
            index, pallet.kunde.name, pallet.gesamtgewicht
        ),
        items: pallet
            .waren
            .iter()
            .enumerate()
            .map(|(i, good)| render_item(i + 1, good))
            .collect(),
    }
}

pub fn render_pallets(pallets: &[Pallet]) -> Vec<PalletView> {
    pallets
        .iter()
        .enumerate()
        .map(|(i, pallet)| render_pallet(i + 1, pallet))
        .collect()
}

pub fn render_unsorted(snapshot: &Snapshot) -> Vec<PalletView> {
    render_pallets(snapshot.pallets())
}

pub fn render_sorted(snapshot: &Snapshot) -> Vec<PalletView> {
    render_pallets(&sorted_pallets(snapshot.pallets()))
}

pub fn render_views(snapshot: &Snapshot) -> ShipmentViews {
    ShipmentViews {
        unsorted: render_unsorted(snapshot),
        sorted: render_sorted(snapshot),
    }
}

/// Plain-text layout: header, then each item indented over two lines.
pub fn to_text(views: &[PalletView]) -> String {
    let mut out = String::new();
    for pallet in views {
        let _ = writeln!(out, "{}", pallet.header);
        for item in &pallet.items {
            let _ = writeln!(out, "  {}", item.summary);
            let _ = writeln!(out, "     {}", item.details);
        }
    }
    out
}
