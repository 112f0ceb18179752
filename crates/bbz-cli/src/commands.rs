use std::path::Path;

use anyhow::Result;
use bbz_cli::config::load_options;
use bbz_cli::fixtures::FixtureStore;
use bbz_cli::pipeline::{create_props, form_state_from_file, submission_from_file};
use bbz_editor::CreationContext;
use bbz_editor::context::{EDITION_GROUP_PARAM, PUBLISHER_PARAM, WORK_PARAM};
use bbz_transform::additional_props;
use serde::Serialize;

use crate::cli::{CreateArgs, InputArgs, SubmitArgs};
use crate::summary::print_summary;

pub fn run_form_state(args: &InputArgs) -> Result<()> {
    let (_, state) = form_state_from_file(&args.input)?;
    print_json(&state)
}

pub fn run_submit(args: &SubmitArgs) -> Result<()> {
    let payload = submission_from_file(&args.input)?;
    if args.additional_props {
        print_json(&additional_props(&payload)?)
    } else {
        print_json(&payload)
    }
}

pub fn run_create(args: &CreateArgs, config: Option<&Path>) -> Result<()> {
    let options = load_options(config)?;
    let fixtures = FixtureStore::load(&args.fixtures)?;
    let context = CreationContext::from_query(
        [
            (PUBLISHER_PARAM, &args.publisher),
            (EDITION_GROUP_PARAM, &args.edition_group),
            (WORK_PARAM, &args.work),
        ]
        .into_iter()
        .filter_map(|(param, bbid)| bbid.as_deref().map(|bbid| (param, bbid))),
    );
    let props = create_props(&fixtures, &context, &options)?;
    print_json(&props)
}

pub fn run_inspect(args: &InputArgs) -> Result<()> {
    let (edition, state) = form_state_from_file(&args.input)?;
    print_summary(&edition, &state);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
