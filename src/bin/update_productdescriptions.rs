use sheetsync::{app, JobSet, SyncJob};

fn main() {
    app::main_with(|| Ok(JobSet::single(SyncJob::product_descriptions())));
}
