use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rseqc-steps", version)]
pub struct Arguments {

    #[arg(short, long, default_value = "read_distribution")]
    pub module: String,

    #[arg(short = 'v', long = "verbose", action)]
    pub verbose: bool,

    #[arg(short = 'i', long = "input-file", help = "Alignment file (BAM/SAM) handed to read_distribution.py")]
    pub input_aln: String,

    #[arg(short = 'r', long = "refgene", help = "Reference gene model in BED format")]
    pub input_refgene: String,

    #[arg(short = 'o', long = "out", help = "File that receives the tool's stdout report. Overwritten if present.")]
    pub output: String,

    #[arg(long, help = "Log file for the tool's stderr. Discarded when not given.")]
    pub log: Option<String>,

    #[arg(long, default_value = "", help = "Additional flags inserted verbatim before --input-file")]
    pub extra: String,
}
