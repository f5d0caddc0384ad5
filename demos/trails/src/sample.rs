//! A tiny embedded dataset used when no data directory is given.
//!
//! 2022-03-01 is a Tuesday, 2022-03-05 a Saturday.  Participant 2 has no
//! location samples, so their trip is reported as missing.

pub const TRAVEL_JOURNAL_CSV: &str = "\
participantId,travelStartTime,travelStartLocationId,travelEndTime,travelEndLocationId,purpose\n\
0,2022-03-01T09:00:00Z,,2022-03-01T09:30:00Z,,Work/Home Commute\n\
0,2022-03-01T17:50:00Z,,2022-03-01T18:30:00Z,,Work/Home Commute\n\
1,2022-03-01T12:00:00Z,,2022-03-01T12:20:00Z,,Eating\n\
1,2022-03-05T14:00:00Z,,2022-03-05T14:30:00Z,,Recreation (Social Gathering)\n\
2,2022-03-01T09:00:00Z,,2022-03-01T09:30:00Z,,Eating\n\
";

pub const STATUS_LOG_CSV: &str = "\
timestamp,currentLocation,participantId,currentMode\n\
2022-03-01T08:55:00Z,POINT (0 0),0,AtHome\n\
2022-03-01T09:05:00Z,POINT (120 340),0,Transport\n\
2022-03-01T09:20:00Z,POINT (480 910),0,Transport\n\
2022-03-01T09:40:00Z,POINT (650 1200),0,AtWork\n\
2022-03-01T17:55:00Z,POINT (600 1100),0,Transport\n\
2022-03-01T18:10:00Z,POINT (300 600),0,Transport\n\
2022-03-01T18:25:00Z,POINT (40 60),0,Transport\n\
2022-03-01T12:05:00Z,POINT (900 200),1,Transport\n\
2022-03-01T12:15:00Z,POINT (1000 250),1,Transport\n\
2022-03-01T22:10:00Z,POINT (1500 800),1,Transport\n\
2022-03-05T14:05:00Z,POINT (-200 1500),1,Transport\n\
2022-03-05T14:20:00Z,POINT (-450 1800),1,Transport\n\
2022-03-05T14:25:00Z,POINT (bad),1,Transport\n\
";

pub const BASE_MAP_CSV: &str = "\
pubId,location,maxOccupancy\n\
0,POINT (-450 1800),60\n\
1,POINT (650 1200),40\n\
2,\"POLYGON ((0 0, 10 0, 10 10, 0 0))\",0\n\
";

pub const BUILDINGS_CSV: &str = "\
buildingId,location,buildingType,maxOccupancy\n\
1,\"POLYGON ((-100 1400, 100 1400, 100 1600, -100 1600, -100 1400))\",Residental,12\n\
2,\"POLYGON ((800 100, 1100 100, 1100 300, 800 300, 800 100))\",Commercial,\n\
3,\"POLYGON ((1400 700, 1600 700, 1600 900))\",School,300\n\
";
