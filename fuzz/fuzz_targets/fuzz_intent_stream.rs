#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use bitext_core::{Link, Side, check_partition};
use bitext_runtime::{Intent, Session};
use libfuzzer_sys::fuzz_target;

/// Positions are folded into a small range so intents overlap often.
const RANGE: u32 = 32;

#[derive(Debug, Arbitrary)]
enum Op {
    Toggle { target: bool, position: u8 },
    Select { target: bool, position: u8 },
    Deselect { target: bool, position: u8 },
    Add { sources: Vec<u8>, targets: Vec<u8> },
    Remove { sources: Vec<u8>, targets: Vec<u8> },
    Commit,
    Reset,
    Hover { target: bool, position: u8, hovered: bool },
    ToggleView,
    FlipDirection { target: bool },
    Draft { sources: Vec<u8>, targets: Vec<u8> },
    Unknown(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    seed: Vec<u8>,
    ops: Vec<Op>,
}

fn side(target: bool) -> Side {
    if target { Side::Target } else { Side::Source }
}

fn positions(raw: &[u8]) -> BTreeSet<u32> {
    raw.iter().map(|&b| u32::from(b) % RANGE).collect()
}

fn apply(session: &mut Session, op: Op) {
    match op {
        Op::Toggle { target, position } => {
            session.dispatch(Intent::toggle(side(target), u32::from(position) % RANGE));
        }
        Op::Select { target, position } => {
            session.dispatch(Intent::select(side(target), u32::from(position) % RANGE));
        }
        Op::Deselect { target, position } => {
            session.dispatch(Intent::deselect(side(target), u32::from(position) % RANGE));
        }
        Op::Add { sources, targets } => {
            session.dispatch(Intent::AddLink {
                sources: positions(&sources),
                targets: positions(&targets),
            });
        }
        Op::Remove { sources, targets } => {
            session.dispatch(Intent::RemoveLink {
                sources: positions(&sources),
                targets: positions(&targets),
            });
        }
        Op::Commit => {
            session.commit_selection();
        }
        Op::Reset => {
            session.dispatch(Intent::ResetSelections);
        }
        Op::Hover { target, position, hovered } => {
            session.hover_segment(side(target), u32::from(position) % RANGE, hovered);
        }
        Op::ToggleView => {
            session.toggle_view();
        }
        Op::FlipDirection { target } => {
            session.flip_direction(side(target));
        }
        Op::Draft { sources, targets } => {
            let draft = Link::manual(positions(&sources), positions(&targets));
            session.dispatch(Intent::SetInProgressLink(Some(draft)));
        }
        Op::Unknown(kind) => {
            session.dispatch(Intent::Unrecognized(kind));
        }
    }
}

fuzz_target!(|input: Input| {
    // Seed with one-to-one links on a random subset of positions.
    let seed: BTreeSet<u32> = input.seed.iter().map(|&b| u32::from(b) % RANGE).collect();
    let links: Vec<Link> = seed.iter().map(|&p| Link::automatic([p], [p])).collect();
    let mut session = Session::new([], [], links);

    for op in input.ops {
        let revision = session.revision();
        apply(&mut session, op);

        // Post-conditions that must always hold:
        let state = session.state();
        if let Err(violation) = check_partition(state.links()) {
            panic!("partition broken: {violation}");
        }
        assert!(state.links().iter().all(|l| !l.is_empty()), "empty link kept");
        assert!(session.revision() - revision <= 1, "revision jumped");
        assert!(
            state.selection(Side::Source).len() <= RANGE as usize,
            "selection escaped the position range"
        );
    }
});
