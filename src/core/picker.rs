use crate::core::delivery::validate_delivery_date;
use crate::core::render::{render_views, ShipmentViews};
use crate::domain::model::Snapshot;
use crate::domain::ports::{Clock, ShipmentSource};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub delivery_date: NaiveDate,
    pub views: ShipmentViews,
}

/// Checks `input` against the clock's current day. Every rejection is logged here.
pub fn check_delivery_date<C: Clock + ?Sized>(
    clock: &C,
    input: Option<&str>,
) -> Result<NaiveDate> {
    let now = clock.now();
    match validate_delivery_date(now, input) {
        Ok(date) => {
            tracing::debug!("Delivery date {} accepted (today {})", date, now.date());
            Ok(date)
        }
        Err(rejection) => {
            tracing::warn!("Delivery date {:?} rejected: {}", input, rejection);
            Err(rejection.into())
        }
    }
}

/// Application state: owns the last fetched snapshot and is its only writer.
pub struct Picker<S: ShipmentSource, C: Clock> {
    source: S,
    clock: C,
    snapshot: Option<Arc<Snapshot>>,
}

impl<S: ShipmentSource, C: Clock> Picker<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            snapshot: None,
        }
    }

    /// Validates the requested date without touching the network.
    pub fn check(&self, input: Option<&str>) -> Result<NaiveDate> {
        check_delivery_date(&self.clock, input)
    }

    /// Validate, fetch, replace the snapshot, render both views.
    /// A rejected date never reaches the shipment source.
    pub async fn submit(&mut self, input: Option<&str>) -> Result<Submission> {
        let delivery_date = self.check(input)?;

        tracing::info!("Fetching shipments for delivery on {}", delivery_date);
        let snapshot = Arc::new(self.source.fetch().await?);
        tracing::info!(
            "Fetched {} pallets with {} goods",
            snapshot.len(),
            snapshot.goods_count()
        );

        self.snapshot = Some(Arc::clone(&snapshot));
        let views = render_views(&snapshot);

        Ok(Submission {
            delivery_date,
            views,
        })
    }

    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.clone()
    }

    /// Re-renders the current snapshot, if any.
    pub fn views(&self) -> Option<ShipmentViews> {
        self.snapshot.as_deref().map(render_views)
    }
}
