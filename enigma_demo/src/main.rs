use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use enigma_core::{Enigma, ReflectorId, RotorId};
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "enigma",
    author,
    version,
    about = "Rotor cipher machine emulator"
)]
struct Cli {
    #[arg(long)]
    debug: bool,
    /// Rotor stack, rightmost (fastest) rotor first; 3 or 5 entries.
    #[arg(long, value_enum, value_delimiter = ',', required = true)]
    rotors: Vec<RotorArg>,
    /// Starting positions, one letter per rotor (defaults to all A).
    #[arg(long)]
    positions: Option<String>,
    /// Ring settings, 1..=26, one per rotor (defaults to all 1).
    #[arg(long, value_delimiter = ',')]
    rings: Vec<u8>,
    /// Plugboard pair, two letters (repeatable, e.g. --plug AT).
    #[arg(long = "plug", value_name = "PAIR")]
    plugs: Vec<String>,
    #[arg(long, value_enum, default_value = "B")]
    reflector: ReflectorArg,
    /// Symbol substituted for spaces (defaults to X).
    #[arg(long)]
    space: Option<char>,
    /// Rebuild a second identical machine and decrypt the output.
    #[arg(long)]
    roundtrip: bool,
    /// Message to encipher.
    #[arg(required = true)]
    message: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RotorArg {
    #[value(name = "I")]
    I,
    #[value(name = "II")]
    II,
    #[value(name = "III")]
    III,
    #[value(name = "IV")]
    IV,
    #[value(name = "V")]
    V,
    #[value(name = "VI")]
    VI,
    #[value(name = "VII")]
    VII,
    #[value(name = "VIII")]
    VIII,
}

impl From<RotorArg> for RotorId {
    fn from(arg: RotorArg) -> Self {
        match arg {
            RotorArg::I => RotorId::I,
            RotorArg::II => RotorId::II,
            RotorArg::III => RotorId::III,
            RotorArg::IV => RotorId::IV,
            RotorArg::V => RotorId::V,
            RotorArg::VI => RotorId::VI,
            RotorArg::VII => RotorId::VII,
            RotorArg::VIII => RotorId::VIII,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReflectorArg {
    #[value(name = "A")]
    A,
    #[value(name = "B")]
    B,
    #[value(name = "C")]
    C,
}

impl From<ReflectorArg> for ReflectorId {
    fn from(arg: ReflectorArg) -> Self {
        match arg {
            ReflectorArg::A => ReflectorId::A,
            ReflectorArg::B => ReflectorId::B,
            ReflectorArg::C => ReflectorId::C,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let rotor_ids: Vec<RotorId> = cli.rotors.iter().copied().map(Into::into).collect();
    let mut machine = build_machine(&cli, &rotor_ids)?;
    println!("{machine}");
    let message = cli.message.join(" ");
    let encrypted = machine.process_message(&message);
    println!("Encrypted:  {encrypted}");
    if cli.roundtrip {
        let mut second = build_machine(&cli, &rotor_ids)?;
        let decrypted = second.process_message(&encrypted);
        println!("Decrypted:  {decrypted}");
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn build_machine(cli: &Cli, rotors: &[RotorId]) -> Result<Enigma> {
    let mut machine = Enigma::new(rotors)?.with_reflector(cli.reflector.into());
    if let Some(space) = cli.space {
        machine = machine.with_space_symbol(space.to_ascii_uppercase());
    }
    let positions = resolve_positions(cli.positions.as_deref(), rotors.len())?;
    let rings = resolve_rings(&cli.rings, rotors.len())?;
    for (rotor, (position, ring)) in machine
        .rotors_mut()
        .iter_mut()
        .zip(positions.into_iter().zip(rings))
    {
        rotor.set_position(position);
        rotor.set_ring_setting(ring);
    }
    for plug in &cli.plugs {
        let (a, b) = parse_plug(plug)?;
        machine.plugboard_mut().plug(a, b);
    }
    Ok(machine)
}

fn resolve_positions(positions: Option<&str>, rotor_count: usize) -> Result<Vec<char>> {
    let Some(positions) = positions else {
        return Ok(vec!['A'; rotor_count]);
    };
    let symbols: Vec<char> = positions
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if symbols.len() != rotor_count {
        bail!(
            "--positions needs one letter per rotor ({} expected, got {})",
            rotor_count,
            symbols.len()
        );
    }
    if let Some(bad) = symbols.iter().find(|c| !c.is_ascii_uppercase()) {
        bail!("--positions accepts letters A-Z only, got {bad:?}");
    }
    Ok(symbols)
}

fn resolve_rings(rings: &[u8], rotor_count: usize) -> Result<Vec<u8>> {
    if rings.is_empty() {
        return Ok(vec![1; rotor_count]);
    }
    if rings.len() != rotor_count {
        bail!(
            "--rings needs one setting per rotor ({} expected, got {})",
            rotor_count,
            rings.len()
        );
    }
    if let Some(bad) = rings.iter().find(|r| !(1..=26).contains(*r)) {
        bail!("--rings accepts 1..=26 only, got {bad}");
    }
    Ok(rings.to_vec())
}

fn parse_plug(pair: &str) -> Result<(char, char)> {
    let symbols: Vec<char> = pair.chars().map(|c| c.to_ascii_uppercase()).collect();
    match symbols.as_slice() {
        [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() && a != b => Ok((*a, *b)),
        _ => bail!("--plug expects two distinct letters, e.g. AT, got {pair:?}"),
    }
}
