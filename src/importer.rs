use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use crate::model::{channel, dtv_multiplex};
use crate::record::ScanRecord;

/// Counters reported after a completed run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub multiplexes_created: usize,
    pub multiplexes_reused: usize,
    pub channels_created: usize,
}

/// Clears both guide tables, then replays every scanner row into them.
///
/// Rows are processed strictly in file order, one at a time; any CSV or
/// database error aborts the run with whatever has been written so far
/// left in place.
pub async fn run(db: &DatabaseConnection, csv_path: &Path) -> Result<ImportSummary> {
    reset_tables(db).await?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;

    let mut summary = ImportSummary::default();
    for row in reader.records() {
        let row = row.context("failed to read CSV record")?;
        let record = ScanRecord::from_csv(&row);
        import_record(db, &record, &mut summary).await?;
    }
    Ok(summary)
}

/// Both tables are emptied up front so a run always rebuilds the guide
/// data from scratch.
async fn reset_tables(db: &DatabaseConnection) -> Result<()> {
    dtv_multiplex::Entity::delete_many().exec(db).await?;
    channel::Entity::delete_many().exec(db).await?;
    Ok(())
}

async fn import_record(
    db: &DatabaseConnection,
    record: &ScanRecord,
    summary: &mut ImportSummary,
) -> Result<()> {
    // First match wins; transport ids stay unique because rows are
    // processed sequentially against this check.
    let existing = dtv_multiplex::Entity::find()
        .filter(dtv_multiplex::Column::Transportid.eq(record.transport_id))
        .one(db)
        .await?;

    let mplexid = match existing {
        Some(multiplex) => {
            summary.multiplexes_reused += 1;
            debug!(transportid = record.transport_id, mplexid = multiplex.mplexid, "multiplex reused");
            multiplex.mplexid
        }
        None => {
            let inserted = dtv_multiplex::Entity::insert(record.multiplex())
                .exec(db)
                .await?;
            summary.multiplexes_created += 1;
            debug!(
                transportid = record.transport_id,
                mplexid = inserted.last_insert_id,
                "multiplex created"
            );
            inserted.last_insert_id
        }
    };

    channel::Entity::insert(record.channel(mplexid)).exec(db).await?;
    summary.channels_created += 1;
    debug!(chanid = record.channel_number, mplexid, "channel created");
    Ok(())
}
