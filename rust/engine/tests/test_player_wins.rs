use montyhall_engine::{does_player_win, Door};

#[test]
fn loses_when_right_door_chosen_and_switches() {
    for d in Door::ALL {
        assert!(!does_player_win(d, d, true), "player switched away from door {}", d);
    }
}

#[test]
fn wins_when_right_door_chosen_and_stays() {
    for d in Door::ALL {
        assert!(does_player_win(d, d, false), "player stayed with door {}", d);
    }
}

#[test]
fn wins_when_wrong_door_chosen_and_switches() {
    for w in Door::ALL {
        for p in w.others() {
            assert!(does_player_win(w, p, true), "winning={} player={}", w, p);
        }
    }
}

#[test]
fn loses_when_wrong_door_chosen_and_stays() {
    for w in Door::ALL {
        for p in w.others() {
            assert!(!does_player_win(w, p, false), "winning={} player={}", w, p);
        }
    }
}

#[test]
fn switching_wins_two_thirds_of_all_pairings() {
    let tally = |switches: bool| {
        let mut wins = 0;
        let mut plays = 0;
        for w in Door::ALL {
            for p in Door::ALL {
                plays += 1;
                if does_player_win(w, p, switches) {
                    wins += 1;
                }
            }
        }
        (wins, plays)
    };
    assert_eq!(tally(true), (6, 9), "switching should win 6 of 9");
    assert_eq!(tally(false), (3, 9), "staying should win 3 of 9");
}
