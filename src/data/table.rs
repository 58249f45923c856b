// @generated by `ec-ref extract` from sheet "Picturemap v2.6"; do not edit by hand.

use crate::model::RawCompletion;

pub const RAW_COMPLETIONS: &[RawCompletion<'static>] = &[
    RawCompletion { name: "EC1x1", notes: "-", ip_req: "1800", tt: "130", studies: &[11, 22, 32, 42, 51, 61, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 171] },
    RawCompletion { name: "EC2x1", notes: "-", ip_req: "975", tt: "135", studies: &[11, 22, 32, 42, 51, 61, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 171] },
    RawCompletion { name: "EC1x2", notes: "60000 Eternities Needed", ip_req: "2000", tt: "140", studies: &[11, 21, 22, 32, 42, 51, 61, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC3x1", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "600", tt: "\"", studies: &[11, 22, 32, 42, 51, 61, 71, 81, 91, 101, 111, 122, 132, 142, 151, 161, 162, 171] },
    RawCompletion { name: "EC4x1", notes: "Fail 1 for Achievement (+21 at 145TT)", ip_req: "2750", tt: "142", studies: &[11, 21, 22, 32, 33, 42, 51, 61, 73, 83, 93, 103, 111, 123, 133, 143] },
    RawCompletion { name: "EC5x1", notes: "-", ip_req: "750", tt: "147", studies: &[11, 21, 22, 32, 42, 51] },
    RawCompletion { name: "EC1x3", notes: "Not recommended to run Idle", ip_req: "2200", tt: "\"", studies: &[11, 21, 22, 32, 33, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC3x2", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "675", tt: "155", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC2x2", notes: "-", ip_req: "1150", tt: "157", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC6x1", notes: "1e15 last crunch, wait for RG (+21 at 163TT)", ip_req: "850", tt: "160", studies: &[11, 21, 22, 32, 33, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141] },
    RawCompletion { name: "EC1x4", notes: "Not recommended to run Idle", ip_req: "2400", tt: "163", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC3x3", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "750", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC7x1", notes: "-", ip_req: "2000", tt: "166", studies: &[11, 21, 22, 32, 42, 51, 61, 62, 71, 81, 91, 101, 111] },
    RawCompletion { name: "EC4x2", notes: "+TS33 / TS62 if you farm to 172TT / 173TT", ip_req: "3300", tt: "170", studies: &[11, 22, 32, 33, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 162, 171] },
    RawCompletion { name: "EC4x3", notes: "-", ip_req: "3850", tt: "175", studies: &[11, 22, 32, 33, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 162, 171] },
    RawCompletion { name: "EC6x2", notes: "-", ip_req: "1100", tt: "\"", studies: &[11, 21, 22, 32, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 162] },
    RawCompletion { name: "EC1x5", notes: "Not recommended to run Idle", ip_req: "2600", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC5x2", notes: "-", ip_req: "1150", tt: "182", studies: &[11, 22, 32, 42, 51, 61, 72, 82, 92, 102, 111] },
    RawCompletion { name: "EC2x3", notes: "-", ip_req: "1325", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC3x4", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "825", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC7x2", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "2530", tt: "193", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141] },
    RawCompletion { name: "EC5x3", notes: "-", ip_req: "1550", tt: "200", studies: &[11, 22, 32, 42, 51, 61, 72, 82, 92, 102, 111, 121, 131, 141] },
    RawCompletion { name: "EC8x1", notes: "0RG, 9% Chance, remaining to Interval, All ID1 ", ip_req: "1300", tt: "\"", studies: &[11, 22, 32, 42, 51, 61, 73, 83, 93, 103, 111, 123, 133, 143, 151, 162] },
    RawCompletion { name: "EC3x5", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "900", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC6x3", notes: "-", ip_req: "1350", tt: "\"", studies: &[11, 21, 22, 32, 33, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC2x4", notes: "-", ip_req: "1500", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC5x4", notes: "+TS33 if you farm to 218TT", ip_req: "1950", tt: "215", studies: &[11, 21, 22, 32, 33, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151] },
    RawCompletion { name: "EC7x3", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "3060", tt: "215", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162] },
    RawCompletion { name: "EC2x5", notes: "-", ip_req: "1675", tt: "240", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC5x5", notes: "+TS31 and TS41 if you farm to 252TT", ip_req: "2350", tt: "245", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC4x4", notes: "-", ip_req: "4400", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 161, 162, 171] },
    RawCompletion { name: "EC6x4", notes: "-", ip_req: "1600", tt: "264", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC7x4", notes: "Use TS73 path to buy EC, For EC change to →", ip_req: "3590", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC8x2", notes: "0RG, 9% Chance, remaining to Interval, All ID1", ip_req: "2200", tt: "310", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 161, 162, 171] },
    RawCompletion { name: "EC6x5", notes: "Get Eternity Upgrade 5 (1e40EP) before EC", ip_req: "1850", tt: "320", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 72, 82, 92, 102, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC4x5", notes: "TS181 Required", ip_req: "4950", tt: "370", studies: &[11, 22, 32, 42, 51, 61, 73, 83, 93, 103, 111, 123, 133, 143, 151, 162, 171, 181] },
    RawCompletion { name: "EC8x3", notes: "4RG, 9% Chance, remaining to Interval, All ID1", ip_req: "3100", tt: "450", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 161, 162, 171, 181] },
    RawCompletion { name: "EC9x1", notes: "-", ip_req: "1750", tt: "522", studies: &[11, 22, 32, 42, 51, 61, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC9x2", notes: "-", ip_req: "2000", tt: "575", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC8x4", notes: "4RG, 9% Chance, remaining to Interval, All ID1", ip_req: "4000", tt: "600", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 161, 162, 171, 181] },
    RawCompletion { name: "EC9x3", notes: "-", ip_req: "2250", tt: "660", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171] },
    RawCompletion { name: "EC9x4", notes: "-", ip_req: "2500", tt: "760", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171, 181] },
    RawCompletion { name: "EC8x5", notes: "0RG, 9% Chance, remaining to Interval, All ID1", ip_req: "4900", tt: "825", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 123, 133, 143, 151, 161, 162, 171, 181] },
    RawCompletion { name: "EC9x5", notes: "-", ip_req: "2750", tt: "830", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 121, 131, 141, 151, 161, 162, 171, 181] },
    RawCompletion { name: "EC10x1", notes: "Farm 150M+ Infinities inside Challenge", ip_req: "3000", tt: "858", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 171, 181] },
    RawCompletion { name: "EC7x5", notes: "-", ip_req: "4120", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171, 181, 193, 214] },
    RawCompletion { name: "EC10x2", notes: "10M+ BInfs Recommended", ip_req: "3300", tt: "1820", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171, 181, 191, 193, 211, 214] },
    RawCompletion { name: "EC10x3", notes: "20M+ BInfs Recommended", ip_req: "3600", tt: "2050", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171, 181, 192, 193, 214] },
    RawCompletion { name: "EC10x4", notes: "30M+ BInfs Recommended", ip_req: "3900", tt: "2740", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171, 181, 191, 192, 193, 211, 213, 214] },
    RawCompletion { name: "EC11x1", notes: "Get \"Popular Music\" before EC11s", ip_req: "450", tt: "2886", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 121, 131, 141, 151, 161, 162, 171, 181, 191, 193, 211, 212, 213, 222, 231] },
    RawCompletion { name: "EC10x5", notes: "45M+ BInfs Recommended", ip_req: "4200", tt: "3615", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 122, 132, 142, 151, 161, 162, 171, 181, 192, 193, 213, 214, 225, 233] },
    RawCompletion { name: "EC11x2", notes: "Get \"Popular Music\" before EC11s", ip_req: "650", tt: "4870", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 192, 193, 211, 213, 222, 225, 231, 233] },
    RawCompletion { name: "EC11x3", notes: "-", ip_req: "850", tt: "5950", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 192, 193, 211, 212, 213, 222, 223, 225, 231, 233] },
    RawCompletion { name: "EC11x4", notes: "-", ip_req: "1050", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 123, 133, 143, 151, 161, 162, 171, 181, 191, 192, 193, 211, 212, 213, 222, 223, 225, 231, 233] },
    RawCompletion { name: "EC11x5", notes: "± 1h45m", ip_req: "1250", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 71, 81, 91, 101, 111, 123, 133, 143, 151, 161, 162, 171, 181, 191, 192, 193, 211, 212, 213, 222, 223, 225, 231, 233] },
    RawCompletion { name: "EC12x1", notes: "Enable Auto-Eternity for all EC12", ip_req: "110000", tt: "9800", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 193, 211, 212, 213, 214, 222, 224, 226, 227, 232, 234] },
    RawCompletion { name: "EC12x2", notes: "Enable Auto-Eternity for all EC12", ip_req: "122000", tt: "\"", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 193, 211, 212, 213, 214, 222, 224, 226, 227, 232, 234] },
    RawCompletion { name: "EC12x3", notes: "Enable Auto-Eternity for all EC12", ip_req: "134000", tt: "10750", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 193, 211, 212, 213, 214, 222, 224, 226, 227, 232, 234] },
    RawCompletion { name: "EC12x4", notes: "150M+ BInfs Recommended", ip_req: "146000", tt: "11200", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 193, 211, 212, 213, 214, 222, 224, 226, 227, 232, 234] },
    RawCompletion { name: "EC12x5", notes: "Can be done without \"Achievement R134\"    →", ip_req: "158000", tt: "12350", studies: &[11, 21, 22, 31, 32, 33, 41, 42, 51, 61, 62, 73, 83, 93, 103, 111, 122, 132, 142, 151, 161, 162, 171, 181, 191, 193, 211, 212, 213, 214, 222, 224, 226, 227, 232, 234] },
];
