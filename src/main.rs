use dungeon_core::cmtp::{Class, LogMessage, PlayerAction, Slot};
use dungeon_core::engine::game::World;
use dungeon_core::engine::{mechanics, SimError};
use dungeon_core::systems::{dungeon, player_action};
use std::io::{self, BufRead as _};

const VIEW_HALF_HEIGHT: i32 = 10;
const VIEW_HALF_WIDTH: i32 = 30;

enum Command {
    Act(PlayerAction),
    Descend,
    Quit,
}

fn parse_slot(word: &str) -> Option<Slot> {
    Slot::ALL
        .iter()
        .copied()
        .find(|slot| slot.to_string().replace(' ', "_") == word)
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    let argument = words.next();
    let index = argument.and_then(|word| word.parse::<usize>().ok());
    let action = match verb {
        "k" => PlayerAction::GoToUp,
        "j" => PlayerAction::GoToDown,
        "h" => PlayerAction::GoToLeft,
        "l" => PlayerAction::GoToRight,
        "y" => PlayerAction::GoToUpLeft,
        "u" => PlayerAction::GoToUpRight,
        "b" => PlayerAction::GoToDownLeft,
        "n" => PlayerAction::GoToDownRight,
        "." => PlayerAction::SkipTurn,
        "g" => PlayerAction::PickUp(index.unwrap_or(0)),
        "e" => PlayerAction::Equip(index?),
        "d" => PlayerAction::DropItem(index?),
        "r" => PlayerAction::Unequip(parse_slot(argument?)?),
        ">" => return Some(Command::Descend),
        "q" => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Act(action))
}

fn render(world: &World, seen_messages: &mut usize) {
    let player = match world.player_creature() {
        Some(player) => player,
        None => return,
    };
    let area = &world.areas[player.area];
    for row in player.row - VIEW_HALF_HEIGHT..=player.row + VIEW_HALF_HEIGHT {
        let line: String = (player.col - VIEW_HALF_WIDTH..=player.col + VIEW_HALF_WIDTH)
            .map(|col| match area.tile_info(row, col) {
                Ok(info) => match info.creature.and_then(|id| area.creature(id)) {
                    Some(creature) => creature.glyph,
                    None => info.items.last().map_or(info.glyph, |item| item.glyph),
                },
                Err(_) => ' ',
            })
            .collect();
        println!("{}", line);
    }
    println!(
        "{} the {} HP {}/{} ATK {} DEF {}",
        player.name,
        player.class,
        player.stats.hp,
        player.stats.max_hp,
        mechanics::power(player),
        mechanics::defense(player)
    );
    if let Some(attribute) = player.class.essential_attribute() {
        println!("{} {}", attribute, player.attributes.get(attribute));
    }
    for LogMessage(text, _) in &world.log[*seen_messages..] {
        println!("> {}", text);
    }
    *seen_messages = world.log.len();
}

fn main() {
    env_logger::init();
    let mut world = match World::load() {
        Ok(world) => world,
        Err(err) => {
            eprintln!("cannot load assets: {}", err);
            std::process::exit(1);
        }
    };
    let name = std::env::args().nth(1).unwrap_or_default();
    if let Err(err) = dungeon::new_level(&mut world, &name, Class::Warrior) {
        eprintln!("cannot build the first level: {}", err);
        std::process::exit(1);
    }
    let mut seen_messages = 0;
    render(&world, &mut seen_messages);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let result = match parse_command(line.trim()) {
            Some(Command::Act(action)) => {
                world.player.action = action;
                player_action::update(&mut world).map(|_| ())
            }
            Some(Command::Descend) => dungeon::new_level(&mut world, &name, Class::Warrior).map(|_| ()),
            Some(Command::Quit) => break,
            None => {
                println!("commands: k j h l y u b n . g [n] e n d n r slot > q");
                continue;
            }
        };
        match result {
            Ok(()) => render(&world, &mut seen_messages),
            Err(SimError::GameOver) => {
                println!("The game is over.");
                break;
            }
            Err(err) => println!("! {}", err),
        }
    }
}
