use clap::*;
use itertools::Itertools;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("cluster")
        .about("Greedy identity clustering of sequences")
        .after_help(
            r###"
Each sequence is compared against the representatives of existing clusters,
in cluster creation order. It joins the first cluster whose representative
scores at or above the threshold; otherwise it starts a new cluster and
becomes that cluster's representative. Input order therefore determines
the result.

Output formats:
* cluster - One line per cluster, member names tab-separated
* pair    - Lines of `representative<TAB>member`
* table   - `#cluster  id  identity` lines; identity is against the
            cluster representative, as a percentage with 2 decimal places

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* The threshold is inclusive: a score equal to it joins the cluster
* An input with no sequences is reported on stderr and is not an error

Examples:
1. Cluster at the default 0.9 threshold:
   sqc cluster input.fa

2. Looser clustering, with per-member identities:
   sqc cluster input.fa -t 0.8 --format table

3. Summary counts plus representative-member pairs:
   sqc cluster input.fa --summary --format pair -o clusters.tsv

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file to process"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .value_parser(value_parser!(f64))
                .default_value("0.9")
                .help("Identity threshold in [0,1]"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .num_args(1)
                .value_parser(["cluster", "pair", "table"])
                .default_value("cluster")
                .help("Output format"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .action(ArgAction::SetTrue)
                .help("Prepend total sequence and cluster counts"),
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
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let threshold = *args.get_one::<f64>("threshold").unwrap();
    let format = args.get_one::<String>("format").unwrap();
    let summary = args.get_flag("summary");

    //----------------------------
    // Process
    //----------------------------
    let seqs = sqc::parse_file(infile)?;
    if seqs.is_empty() {
        eprintln!("No sequences found in {}", infile);
        return Ok(());
    }

    let clusters = sqc::cluster(&seqs, threshold)?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = sqc::writer(args.get_one::<String>("outfile").unwrap())?;

    if summary {
        writer.write_fmt(format_args!("#total_sequences: {}\n", seqs.len()))?;
        writer.write_fmt(format_args!("#total_clusters: {}\n", clusters.len()))?;
    }

    match format.as_str() {
        "cluster" => {
            for c in &clusters {
                let line = c.members.iter().map(|(id, _)| id.as_str()).join("\t");
                writer.write_fmt(format_args!("{}\n", line))?;
            }
        }
        "pair" => {
            for c in &clusters {
                let (rep_id, _) = c.representative();
                for (id, _) in &c.members {
                    writer.write_fmt(format_args!("{}\t{}\n", rep_id, id))?;
                }
            }
        }
        "table" => {
            writer.write_fmt(format_args!("#cluster\tid\tidentity\n"))?;
            for (i, c) in clusters.iter().enumerate() {
                let (_, rep_seq) = c.representative();
                for (id, seq) in &c.members {
                    writer.write_fmt(format_args!(
                        "{}\t{}\t{:.2}\n",
                        i + 1,
                        id,
                        sqc::identity(rep_seq, seq) * 100.0
                    ))?;
                }
            }
        }
        _ => unreachable!(),
    }

    Ok(())
}
