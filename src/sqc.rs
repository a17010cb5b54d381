extern crate clap;
use clap::*;

mod cmd_sqc;

fn main() -> anyhow::Result<()> {
    let app = Command::new("sqc")
        .version(crate_version!())
        .about("`sqc` - Sequence Clustering tools")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_sqc::cluster::make_subcommand())
        .subcommand(cmd_sqc::identity::make_subcommand())
        .subcommand(cmd_sqc::size::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Clustering:
    * cluster - Greedy identity clustering

* Inspection:
    * identity - Pairwise identity table
    * size     - Sequence lengths

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("cluster", sub_matches)) => cmd_sqc::cluster::execute(sub_matches),
        Some(("identity", sub_matches)) => cmd_sqc::identity::execute(sub_matches),
        Some(("size", sub_matches)) => cmd_sqc::size::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
