use clap::*;
use itertools::Itertools;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("identity")
        .about("Pairwise identities between all sequences")
        .after_help(
            r###"
This command scores every pair of sequences in the input and writes a
tab-separated table: name1, name2, identity in [0,1] to 4 decimal places.

The score is the fraction of matching positions over the shorter of the
two sequences. Overhang beyond the shorter sequence is ignored; there is
no alignment and no gap penalty.

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* Pairs follow the order sequences appear in the input

Examples:
1. Unique pairs:
   sqc identity input.fa

2. Full square table, self pairs included:
   sqc identity input.fa --full

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file to process"),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .action(ArgAction::SetTrue)
                .help("Emit self pairs and both orientations"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let full = args.get_flag("full");

    let seqs = sqc::parse_file(infile)?;
    let mut writer = sqc::writer(args.get_one::<String>("outfile").unwrap())?;

    if full {
        for (id1, seq1) in &seqs {
            for (id2, seq2) in &seqs {
                writer.write_fmt(format_args!(
                    "{}\t{}\t{:.4}\n",
                    id1,
                    id2,
                    sqc::identity(seq1, seq2)
                ))?;
            }
        }
    } else {
        for ((id1, seq1), (id2, seq2)) in seqs.iter().tuple_combinations() {
            writer.write_fmt(format_args!(
                "{}\t{}\t{:.4}\n",
                id1,
                id2,
                sqc::identity(seq1, seq2)
            ))?;
        }
    }

    Ok(())
}
