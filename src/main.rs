use delve::command::Command;
use delve::game_logic::{
    check_path, collect_item, move_player, process_npc_events, statistics, undo_move,
};
use delve::game_state::GameState;
use delve::ui;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut state = GameState::new(&mut rng);

    println!("{}", "-".repeat(50));
    println!("Welcome to the Dungeon Crawler!");
    println!("Type 'help' for available commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.game_over {
        println!("{}", "-".repeat(50));
        println!("{}", ui::render_legend());
        println!("DUNGEON MAP:");
        println!("{}", ui::render_map(&state));
        println!("{}", ui::render_status(&state));

        if let Some(event) = process_npc_events(&mut state, &mut rng) {
            println!("{}", ui::event_message(&event));
        }

        print!("Enter command: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Move(direction) => match move_player(&mut state, direction, &mut rng) {
                Ok(events) => {
                    for event in &events {
                        println!("{}", ui::event_message(event));
                    }
                }
                Err(err) => println!("{err}"),
            },
            Command::Get => match collect_item(&mut state) {
                Ok(name) => println!("Collected {name}!"),
                Err(err) => println!("{err}"),
            },
            Command::Inventory => println!("{}", ui::render_inventory(&state)),
            Command::Quests => println!("{}", ui::render_quest_log(&state)),
            Command::Path => {
                if check_path(&mut state) {
                    println!("There IS a path to the goal from your current position!");
                } else {
                    println!("No path to the goal found from current position.");
                }
            }
            Command::Undo => match undo_move(&mut state) {
                Ok((row, col)) => println!("Undid last move. Back to ({row}, {col})"),
                Err(err) => println!("{err}"),
            },
            Command::Help => println!("{}", ui::render_help()),
            Command::Stats => println!("{}", ui::render_stats(&statistics(&state))),
            Command::Quit => {
                println!("Thanks for playing! Goodbye!");
                return Ok(());
            }
        }
    }

    if state.game_over {
        println!("\nGAME COMPLETED in {} turns!", state.turn_count);
        println!("Final Statistics:");
        println!("{}", ui::render_stats(&statistics(&state)));
    }

    Ok(())
}
