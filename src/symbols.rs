//! Station symbols.
//!
//! A symbol is selected by a table character and a code character. The two
//! standard tables are primary (`/`) and alternate (`\`); any other table
//! character is an overlay drawn on top of the alternate table symbol.
//!
//! Reference: https://www.aprs.org/symbols/symbolsX.txt

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub const PRIMARY_TABLE: char = '/';
pub const ALTERNATE_TABLE: char = '\\';

/// Raw symbol identity as transmitted.
///
/// Lookups never fail: unknown or future table/code pairs are kept verbatim so
/// they can still be displayed, and their [`Symbol::kind`] is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Symbol {
    pub table: char,
    pub code: char,
    /// Named symbol for the pair, resolved when the symbol is built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<AprsSymbol>,
}

pub fn symbol_of(code: char, table: char) -> Symbol {
    Symbol {
        table,
        code,
        kind: resolve(table, code),
    }
}

fn resolve(table: char, code: char) -> Option<AprsSymbol> {
    match table {
        PRIMARY_TABLE => AprsSymbol::primary(code),
        ALTERNATE_TABLE => AprsSymbol::alternate(code),
        _ if overlay_of(table).is_some() => AprsSymbol::alternate(code),
        _ => None,
    }
}

fn overlay_of(table: char) -> Option<char> {
    match table {
        '0'..='9' | 'A'..='Z' => Some(table),
        'a'..='j' => char::from_digit(table as u32 - 'a' as u32, 10),
        _ => None,
    }
}

impl Symbol {
    /// Overlay character drawn on the symbol, if the table character is one.
    ///
    /// Compressed positions encode the numeric overlays `0-9` as `a-j`.
    pub fn overlay(&self) -> Option<char> {
        overlay_of(self.table)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.table, self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AprsSymbol {
    // Primary table
    /// `/!` Police, Sheriff
    PoliceSheriff,
    /// `/"` reserved (was rain)
    ReservedRain,
    /// `/#` DIGI (white center)
    DigiWhiteCenter,
    /// `/$` PHONE
    Phone,
    /// `/%` DX CLUSTER
    DxCluster,
    /// `/&` HF GATEway
    HfGateway,
    /// `/'` Small AIRCRAFT (SSID-11)
    SmallAircraft,
    /// `/(` Mobile Satellite Station
    MobileSatelliteStation,
    /// `/)` Wheelchair (handicapped)
    WheelchairHandicapped,
    /// `/*` SnowMobile
    Snowmobile,
    /// `/+` Red Cross
    RedCross,
    /// `/,` Boy Scouts
    BoyScouts,
    /// `/-` House QTH (VHF)
    HouseQthVhf,
    /// `/.` X
    X,
    /// `//` Red Dot
    RedDot,
    /// `/0` # circle (obsolete)
    CircleObsolete,
    /// `/1` TBD (these were numbered)
    TbdNumbered1,
    /// `/2` TBD (circles like pool)
    TbdCirclesPool2,
    /// `/3` TBD (balls. But with)
    TbdBalls3,
    /// `/4` TBD (overlays, we can)
    TbdOverlays4,
    /// `/5` TBD (put all #'s on one)
    TbdNumbers5,
    /// `/6` TBD (So 1-9 are available)
    TbdAvailable6,
    /// `/7` TBD (for new uses?)
    TbdNewUses7,
    /// `/8` TBD (They are often used)
    TbdMobilesEvents8,
    /// `/9` TBD (as mobiles at events)
    TbdMobilesEvents9,
    /// `/:` FIRE
    Fire,
    /// `/;` Campground (Portable ops)
    CampgroundPortableOps,
    /// `/<` Motorcycle (SSID-10)
    Motorcycle,
    /// `/=` RAILROAD ENGINE
    RailroadEngine,
    /// `/>` CAR (SSID-9)
    Car,
    /// `/?` SERVER for Files
    ServerForFiles,
    /// `/@` HC FUTURE predict (dot)
    HcFuturePredict,
    /// `/A` Aid Station
    AidStation,
    /// `/B` BBS or PBBS
    BbsOrPbbs,
    /// `/C` Canoe
    Canoe,
    /// `/E` EYEBALL (Events, etc!)
    EyeballEvents,
    /// `/F` Farm Vehicle (tractor)
    FarmVehicleTractor,
    /// `/G` Grid Square (6 digit)
    GridSquare6Digit,
    /// `/H` HOTEL (blue bed symbol)
    HotelBlueBed,
    /// `/I` TcpIp on air network stn
    TcpipOnAirNetwork,
    /// `/K` School
    School,
    /// `/L` PC user (Jan 03)
    PcUser,
    /// `/M` MacAPRS
    MacAprs,
    /// `/N` NTS Station
    NtsStation,
    /// `/O` BALLOON (SSID-11)
    Balloon,
    /// `/P` Police
    Police,
    /// `/Q` TBD
    Tbd,
    /// `/R` REC. VEHICLE (SSID-13)
    RecVehicle,
    /// `/S` SHUTTLE
    Shuttle,
    /// `/T` SSTV
    Sstv,
    /// `/U` BUS (SSID-2)
    Bus,
    /// `/V` ATV
    Atv,
    /// `/W` National WX Service Site
    NationalWxServiceSite,
    /// `/X` HELO (SSID-6)
    Helo,
    /// `/Y` YACHT (sail) (SSID-5)
    YachtSail,
    /// `/Z` WinAPRS
    WinAprs,
    /// `/[` Human/Person (SSID-7)
    HumanPerson,
    /// `/\` TRIANGLE(DF station)
    TriangleDfStation,
    /// `/]` MAIL/PostOffice(was PBBS)
    MailPostOffice,
    /// `/^` LARGE AIRCRAFT
    LargeAircraft,
    /// `/_` WEATHER Station (blue)
    WeatherStation,
    /// ``/` `` Dish Antenna
    DishAntenna,
    /// `/a` AMBULANCE (SSID-1)
    Ambulance,
    /// `/b` BIKE (SSID-4)
    Bike,
    /// `/c` Incident Command Post
    IncidentCommandPost,
    /// `/d` Fire dept
    FireDept,
    /// `/e` HORSE (equestrian)
    HorseEquestrian,
    /// `/f` FIRE TRUCK (SSID-3)
    FireTruck,
    /// `/g` Glider
    Glider,
    /// `/h` HOSPITAL
    Hospital,
    /// `/i` IOTA (islands on the air)
    IotaIslandsOnTheAir,
    /// `/j` JEEP (SSID-12)
    Jeep,
    /// `/k` TRUCK (SSID-14)
    Truck,
    /// `/l` Laptop (Jan 03) (Feb 07)
    Laptop,
    /// `/m` Mic-E Repeater
    MicERepeater,
    /// `/n` Node (black bulls-eye)
    NodeBlackBullseye,
    /// `/o` EOC
    Eoc,
    /// `/p` ROVER (puppy, or dog)
    Paraglider,
    /// `/q` GRID SQ shown above 128 m
    GridSqShownAbove128m,
    /// `/r` Repeater (Feb 07)
    Repeater,
    /// `/s` SHIP (pwr boat) (SSID-8)
    ShipPwrBoat,
    /// `/t` TRUCK STOP
    TruckStop,
    /// `/u` TRUCK (18 wheeler)
    Truck18Wheeler,
    /// `/v` VAN (SSID-15)
    Van,
    /// `/w` WATER station
    WaterStation,
    /// `/x` xAPRS (Unix)
    XAprsUnix,
    /// `/y` YAGI @ QTH
    YagiAtQth,
    /// `/z` TBD
    TbdZ,
    /// `/|` TNC Stream Switch
    TncStreamSwitch1,
    /// `/~` TNC Stream Switch
    TncStreamSwitch2,

    // Alternate table
    /// `\!` EMERGENCY (and overlays)
    EmergencyAndOverlays,
    /// `\"` reserved
    ReservedAlt,
    /// `\#` OVERLAY DIGI (green star)
    OverlayDigiGreenStar,
    /// `\$` Bank or ATM (green box)
    BankAtmGreenBox,
    /// `\%` Power Plant with overlay
    PowerPlantWithOverlay,
    /// `\&` I=Igte R=RX T=1hopTX 2=2hopTX
    IgateRxTx1hop2hop,
    /// `\'` Crash (& now Incident sites)
    CrashIncidentSites,
    /// `\(` CLOUDY (other clouds w ovrly)
    CloudyOtherClouds,
    /// `\)` Firenet MEO, MODIS Earth Obs.
    FirenetMeoModisEarthObs,
    /// `\*` AVAIL (SNOW moved to ` ovly S)
    AvailSnowMoved,
    /// `\+` Church
    Church,
    /// `\,` Girl Scouts
    GirlScouts,
    /// `\-` House (H=HF) (O = Op Present)
    HouseHfOpPresent,
    /// `\.` Ambiguous (Big Question mark)
    AmbiguousBigQuestionMark,
    /// `\/` Waypoint Destination
    WaypointDestination,
    /// `\0` CIRCLE (IRLP/Echolink/WIRES)
    CircleIrlpEcholinkWires,
    /// `\1` AVAIL
    Avail1,
    /// `\2` AVAIL
    Avail2,
    /// `\3` AVAIL
    Avail3,
    /// `\4` AVAIL
    Avail4,
    /// `\5` AVAIL
    Avail5,
    /// `\6` AVAIL
    Avail6,
    /// `\7` AVAIL
    Avail7,
    /// `\8` 802.11 or other network node
    Network80211OrOther,
    /// `\9` Gas Station (blue pump)
    GasStationBluePump,
    /// `\:` AVAIL (Hail ==> ` ovly H)
    AvailHail,
    /// `\;` Park/Picnic + overlay events
    ParkPicnicOverlayEvents,
    /// `\<` ADVISORY (one WX flag)
    AdvisoryOneWxFlag,
    /// `\=` avail. symbol overlay group
    AvailSymbolOverlayGroup,
    /// `\>` OVERLAYED CARs & Vehicles
    OverlayedCarsVehicles,
    /// `\?` INFO Kiosk (Blue box with ?)
    InfoKioskBlueBox,
    /// `\@` HURICANE/Trop-Storm
    HuricanetropStorm,
    /// `\A` overlayBOX DTMF & RFID & XO
    OverlayBoxDtmfRfidXo,
    /// `\B` AVAIL (BlwngSnow ==> E ovly B
    AvailBlowingSnow,
    /// `\C` Coast Guard
    CoastGuard,
    /// `\D` DEPOTS (Drizzle ==> ' ovly D)
    DepotsAndDrizzle,
    /// `\E` Smoke (& other vis codes)
    SmokeAndOtherVisCodes,
    /// `\F` AVAIL (FrzngRain ==> `F)
    AvailFreezingRain,
    /// `\G` AVAIL (Snow Shwr ==> I ovly S)
    AvailSnowShower,
    /// `\H` \Haze (& Overlay Hazards)
    HazeAndOverlayHazards,
    /// `\I` Rain Shower
    RainShower,
    /// `\J` AVAIL (Lightening ==> I ovly L)
    AvailLightning,
    /// `\K` Kenwood HT (W)
    KenwoodHt,
    /// `\L` Lighthouse
    Lighthouse,
    /// `\M` MARS (A=Army,N=Navy,F=AF)
    MarsArmyNavyAf,
    /// `\N` Navigation Buoy
    NavigationBuoy,
    /// `\O` Overlay Balloon (Rocket = \O)
    OverlayBalloonRocket,
    /// `\P` Parking
    Parking,
    /// `\Q` QUAKE
    Quake,
    /// `\R` Restaurant
    Restaurant,
    /// `\S` Satellite/Pacsat
    SatellitePacsat,
    /// `\T` Thunderstorm
    Thunderstorm,
    /// `\U` SUNNY
    Sunny,
    /// `\V` VORTAC Nav Aid
    VortacNavAid,
    /// `\W` # NWS site (NWS options)
    NwsSiteWithOptions,
    /// `\X` Pharmacy Rx (Apothicary)
    PharmacyRxApothicary,
    /// `\Y` Radios and devices
    RadiosAndDevices,
    /// `\Z` AVAIL
    AvailZ,
    /// `\[` W.Cloud (& humans w Ovrly)
    WCloudAndHumansOverlay,
    /// `\\` New overlayable GPS symbol
    NewOverlayableGpsSymbol,
    /// `\]` AVAIL
    AvailBackslash,
    /// `\^` other Aircraft ovrlys (2014)
    OtherAircraftOverlays,
    /// `\_` # WX site (green digi)
    WxSiteGreenDigi,
    /// ``\` `` Rain (all types w ovrly)
    RainAllTypesWithOverlay,
    /// `\a` ARRL,ARES,WinLINK,Dstar, etc
    ArrlAresWinlinkDstar,
    /// `\b` AVAIL(Blwng Dst/Snd => E ovly)
    AvailBlowingDustSand,
    /// `\c` CD triangle RACES/SATERN/etc
    CdTriangleRacesSatern,
    /// `\d` DX spot by callsign
    DxSpotByCallsign,
    /// `\e` Sleet (& future ovrly codes)
    SleetAndFutureOverlays,
    /// `\f` Funnel Cloud
    FunnelCloud,
    /// `\g` Gale Flags
    GaleFlags,
    /// `\h` Store. or HAMFST Hh=HAM store
    StoreOrHamfest,
    /// `\i` BOX or points of Interest
    BoxOrPointsOfInterest,
    /// `\j` WorkZone (Steam Shovel)
    WorkZoneSteamShovel,
    /// `\k` Special Vehicle SUV,ATV,4x4
    SpecialVehicleSuvAtv4x4,
    /// `\l` Areas (box,circles,etc)
    AreasBoxCircles,
    /// `\m` Value Sign (3 digit display)
    ValueSign3DigitDisplay,
    /// `\n` OVERLAY TRIANGLE
    OverlayTriangle,
    /// `\o` small circle
    SmallCircle,
    /// `\p` AVAIL (PrtlyCldy => ( ovly P
    AvailPartlyCloudy,
    /// `\q` AVAIL
    AvailQ,
    /// `\r` Restrooms
    Restrooms,
    /// `\s` OVERLAY SHIP/boats
    OverlayShipBoats,
    /// `\t` Tornado
    Tornado,
    /// `\u` OVERLAYED TRUCK
    OverlayedTruck,
    /// `\v` OVERLAYED Van
    OverlayedVan,
    /// `\w` Flooding (Avalanches/Slides)
    FloodingAvalanchesSlides,
    /// `\x` Wreck or Obstruction ->X<-
    WreckOrObstruction,
    /// `\y` Skywarn
    Skywarn,
    /// `\z` OVERLAYED Shelter
    OverlayedShelter,
    /// `\{` AVAIL? (Fog ==> E ovly F)
    AvailFog,
    /// `\|` TNC Stream Switch
    TncStreamSwitchAlt1,
    /// `\}` AVAIL? (maybe)
    AvailMaybe,
    /// `\~` TNC Stream Switch
    TncStreamSwitchAlt2,
}

impl AprsSymbol {
    /// Symbol for `code` in the primary (`/`) table.
    pub fn primary(code: char) -> Option<Self> {
        use AprsSymbol::*;

        Some(match code {
            '!' => PoliceSheriff,
            '"' => ReservedRain,
            '#' => DigiWhiteCenter,
            '$' => Phone,
            '%' => DxCluster,
            '&' => HfGateway,
            '\'' => SmallAircraft,
            '(' => MobileSatelliteStation,
            ')' => WheelchairHandicapped,
            '*' => Snowmobile,
            '+' => RedCross,
            ',' => BoyScouts,
            '-' => HouseQthVhf,
            '.' => X,
            '/' => RedDot,
            '0' => CircleObsolete,
            '1' => TbdNumbered1,
            '2' => TbdCirclesPool2,
            '3' => TbdBalls3,
            '4' => TbdOverlays4,
            '5' => TbdNumbers5,
            '6' => TbdAvailable6,
            '7' => TbdNewUses7,
            '8' => TbdMobilesEvents8,
            '9' => TbdMobilesEvents9,
            ':' => Fire,
            ';' => CampgroundPortableOps,
            '<' => Motorcycle,
            '=' => RailroadEngine,
            '>' => Car,
            '?' => ServerForFiles,
            '@' => HcFuturePredict,
            'A' => AidStation,
            'B' => BbsOrPbbs,
            'C' => Canoe,
            'E' => EyeballEvents,
            'F' => FarmVehicleTractor,
            'G' => GridSquare6Digit,
            'H' => HotelBlueBed,
            'I' => TcpipOnAirNetwork,
            'K' => School,
            'L' => PcUser,
            'M' => MacAprs,
            'N' => NtsStation,
            'O' => Balloon,
            'P' => Police,
            'Q' => Tbd,
            'R' => RecVehicle,
            'S' => Shuttle,
            'T' => Sstv,
            'U' => Bus,
            'V' => Atv,
            'W' => NationalWxServiceSite,
            'X' => Helo,
            'Y' => YachtSail,
            'Z' => WinAprs,
            '[' => HumanPerson,
            '\\' => TriangleDfStation,
            ']' => MailPostOffice,
            '^' => LargeAircraft,
            '_' => WeatherStation,
            '`' => DishAntenna,
            'a' => Ambulance,
            'b' => Bike,
            'c' => IncidentCommandPost,
            'd' => FireDept,
            'e' => HorseEquestrian,
            'f' => FireTruck,
            'g' => Glider,
            'h' => Hospital,
            'i' => IotaIslandsOnTheAir,
            'j' => Jeep,
            'k' => Truck,
            'l' => Laptop,
            'm' => MicERepeater,
            'n' => NodeBlackBullseye,
            'o' => Eoc,
            'p' => Paraglider,
            'q' => GridSqShownAbove128m,
            'r' => Repeater,
            's' => ShipPwrBoat,
            't' => TruckStop,
            'u' => Truck18Wheeler,
            'v' => Van,
            'w' => WaterStation,
            'x' => XAprsUnix,
            'y' => YagiAtQth,
            'z' => TbdZ,
            '|' => TncStreamSwitch1,
            '~' => TncStreamSwitch2,
            _ => return None,
        })
    }

    /// Symbol for `code` in the alternate (`\`) table, also used for overlays.
    pub fn alternate(code: char) -> Option<Self> {
        use AprsSymbol::*;

        Some(match code {
            '!' => EmergencyAndOverlays,
            '"' => ReservedAlt,
            '#' => OverlayDigiGreenStar,
            '$' => BankAtmGreenBox,
            '%' => PowerPlantWithOverlay,
            '&' => IgateRxTx1hop2hop,
            '\'' => CrashIncidentSites,
            '(' => CloudyOtherClouds,
            ')' => FirenetMeoModisEarthObs,
            '*' => AvailSnowMoved,
            '+' => Church,
            ',' => GirlScouts,
            '-' => HouseHfOpPresent,
            '.' => AmbiguousBigQuestionMark,
            '/' => WaypointDestination,
            '0' => CircleIrlpEcholinkWires,
            '1' => Avail1,
            '2' => Avail2,
            '3' => Avail3,
            '4' => Avail4,
            '5' => Avail5,
            '6' => Avail6,
            '7' => Avail7,
            '8' => Network80211OrOther,
            '9' => GasStationBluePump,
            ':' => AvailHail,
            ';' => ParkPicnicOverlayEvents,
            '<' => AdvisoryOneWxFlag,
            '=' => AvailSymbolOverlayGroup,
            '>' => OverlayedCarsVehicles,
            '?' => InfoKioskBlueBox,
            '@' => HuricanetropStorm,
            'A' => OverlayBoxDtmfRfidXo,
            'B' => AvailBlowingSnow,
            'C' => CoastGuard,
            'D' => DepotsAndDrizzle,
            'E' => SmokeAndOtherVisCodes,
            'F' => AvailFreezingRain,
            'G' => AvailSnowShower,
            'H' => HazeAndOverlayHazards,
            'I' => RainShower,
            'J' => AvailLightning,
            'K' => KenwoodHt,
            'L' => Lighthouse,
            'M' => MarsArmyNavyAf,
            'N' => NavigationBuoy,
            'O' => OverlayBalloonRocket,
            'P' => Parking,
            'Q' => Quake,
            'R' => Restaurant,
            'S' => SatellitePacsat,
            'T' => Thunderstorm,
            'U' => Sunny,
            'V' => VortacNavAid,
            'W' => NwsSiteWithOptions,
            'X' => PharmacyRxApothicary,
            'Y' => RadiosAndDevices,
            'Z' => AvailZ,
            '[' => WCloudAndHumansOverlay,
            '\\' => NewOverlayableGpsSymbol,
            ']' => AvailBackslash,
            '^' => OtherAircraftOverlays,
            '_' => WxSiteGreenDigi,
            '`' => RainAllTypesWithOverlay,
            'a' => ArrlAresWinlinkDstar,
            'b' => AvailBlowingDustSand,
            'c' => CdTriangleRacesSatern,
            'd' => DxSpotByCallsign,
            'e' => SleetAndFutureOverlays,
            'f' => FunnelCloud,
            'g' => GaleFlags,
            'h' => StoreOrHamfest,
            'i' => BoxOrPointsOfInterest,
            'j' => WorkZoneSteamShovel,
            'k' => SpecialVehicleSuvAtv4x4,
            'l' => AreasBoxCircles,
            'm' => ValueSign3DigitDisplay,
            'n' => OverlayTriangle,
            'o' => SmallCircle,
            'p' => AvailPartlyCloudy,
            'q' => AvailQ,
            'r' => Restrooms,
            's' => OverlayShipBoats,
            't' => Tornado,
            'u' => OverlayedTruck,
            'v' => OverlayedVan,
            'w' => FloodingAvalanchesSlides,
            'x' => WreckOrObstruction,
            'y' => Skywarn,
            'z' => OverlayedShelter,
            '{' => AvailFog,
            '|' => TncStreamSwitchAlt1,
            '}' => AvailMaybe,
            '~' => TncStreamSwitchAlt2,
            _ => return None,
        })
    }
}
