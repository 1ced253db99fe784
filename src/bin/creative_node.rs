//! Minimal demonstration node: connects to a peer, frames its stream
//! through a `PacketParser`, and logs each decoded packet. Exists to
//! exercise the parser against a live `TcpStream`; not a full node.

use clap::Parser;
use log::{error, info, warn};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use creativecoin_core::init_logging;
use creativecoin_core::network_params::NetworkParams;
use creativecoin_core::parser::{PacketParser, ParseEvent};

#[derive(Parser, Debug)]
#[command(name = "creative-node", about = "Demo packet-parser client")]
struct Cli {
    /// Peer address to connect to, host:port.
    #[arg(long)]
    peer: String,

    /// Network to frame against: main, testnet, or regtest.
    #[arg(long, default_value = "main")]
    network: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let network = match NetworkParams::get(&cli.network) {
        Ok(network) => network,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    info!("connecting to {} on network {}", cli.peer, network.name);
    let mut stream = TcpStream::connect(&cli.peer).await?;
    let mut parser = PacketParser::new(network);
    let mut buf = [0u8; 8192];

    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            info!("peer closed connection");
            break;
        }

        for event in parser.feed(buf[..n].to_vec()) {
            match event {
                ParseEvent::Packet(message) => info!("packet: {message:?}"),
                ParseEvent::Error(err) => warn!("framing error: {err}"),
            }
        }
    }

    Ok(())
}
