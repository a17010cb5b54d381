use clap::*;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("size")
        .about("Counts sequence lengths in FASTA file(s)")
        .after_help(
            r###"
This command lists each sequence name and its length in a tab-separated format.

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* Lengths count characters after joining wrapped lines

Examples:
1. Lengths in a single FASTA file:
   sqc size input.fa

2. Lengths in multiple FASTA files:
   sqc size input1.fa input2.fa

3. Save the output to a file:
   sqc size input.fa -o output.tsv

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FASTA file(s) to process"),
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
    let mut writer = sqc::writer(args.get_one::<String>("outfile").unwrap())?;

    for infile in args.get_many::<String>("infiles").unwrap() {
        let seqs = sqc::parse_file(infile)?;

        for (id, seq) in &seqs {
            writer.write_fmt(format_args!("{}\t{}\n", id, seq.chars().count()))?;
        }
    }

    Ok(())
}
