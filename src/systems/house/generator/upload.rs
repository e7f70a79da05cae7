// uploaded floor plan summary (room type + area) -> Room records for the layout engine

use bevy::log::warn;

use crate::config::UPLOAD_ASPECT;
use super::params::{Room, RoomType};
use super::utils::round_tenth;

fn room_type_from_word(word: &str) -> Option<RoomType> {
    let word = word.to_lowercase();
    let room_type = match word.as_str() {
        "living" | "lounge" => RoomType::Living,
        "kitchen" => RoomType::Kitchen,
        "bedroom" | "bed" => RoomType::Bedroom,
        "bathroom" | "bath" | "wc" => RoomType::Bathroom,
        "dining" => RoomType::Dining,
        "study" | "office" => RoomType::Study,
        "corridor" | "hall" => RoomType::Corridor,
        _ => return None,
    };
    Some(room_type)
}

/// Parses a plan summary like `living 24, kitchen 12, bedroom 14`.
/// Entries are separated by commas or newlines, unreadable ones are skipped.
pub fn parse_room_areas(text: &str) -> Vec<(RoomType, f32)> {
    text.split([',', '\n', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let mut parts = entry.split_whitespace();
            let parsed = match (parts.next().and_then(room_type_from_word), parts.next().map(str::parse::<f32>)) {
                (Some(room_type), Some(Ok(area))) if area > 0.0 => Some((room_type, area)),
                _ => None,
            };
            if parsed.is_none() {
                warn!("skipping plan entry {:?}", entry);
            }
            parsed
        })
        .collect()
}

/// Rooms have no position, the layout engine packs them onto the floor plate.
pub fn rooms_from_areas(areas: &[(RoomType, f32)], floor_count: u32) -> Vec<Room> {
    areas
        .iter()
        .enumerate()
        .map(|(n, &(room_type, area))| {
            let area = area.max(1.0);
            let width = (area * UPLOAD_ASPECT).sqrt();
            let floor = if room_type.is_public() || floor_count < 2 { 0 } else { 1 };
            Room {
                id: format!("upload-{}", n + 1),
                name: room_type.label().to_string(),
                room_type,
                floor,
                width: round_tenth(width),
                depth: round_tenth(area / width),
                x: None,
                z: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_kept_with_a_wide_aspect() {
        let rooms = rooms_from_areas(&[(RoomType::Living, 20.0)], 1);
        let room = &rooms[0];
        assert_eq!(room.id, "upload-1");
        assert_eq!(room.name, "Living Room");
        assert_eq!(room.width, 5.0);
        assert_eq!(room.depth, 4.0);
    }

    #[test]
    fn private_rooms_go_upstairs_in_multi_storey_houses() {
        let areas = [(RoomType::Kitchen, 12.0), (RoomType::Bedroom, 14.0), (RoomType::Bathroom, 6.0)];
        let floors: Vec<u32> = rooms_from_areas(&areas, 2).iter().map(|r| r.floor).collect();
        assert_eq!(floors, [0, 1, 1]);
        let single: Vec<u32> = rooms_from_areas(&areas, 1).iter().map(|r| r.floor).collect();
        assert_eq!(single, [0, 0, 0]);
    }

    #[test]
    fn plan_summaries_parse_loosely() {
        let areas = parse_room_areas("Living 24, kitchen 12\nbath 5.5; garage 30, bedroom x");
        assert_eq!(areas, vec![(RoomType::Living, 24.0), (RoomType::Kitchen, 12.0), (RoomType::Bathroom, 5.5)]);
        assert!(parse_room_areas("   ").is_empty());
    }

    #[test]
    fn room_labels_read_back_as_plan_words() {
        for room_type in RoomType::ALL {
            let word = room_type.label().split_whitespace().next().unwrap();
            assert_eq!(room_type_from_word(word), Some(room_type), "{}", word);
        }
    }
}
