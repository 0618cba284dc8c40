// Generated by `registry-gen rust`. Do not edit.

use super::{StringOffset, TrieNode};

// 465 bytes
pub(super) static STRING_TABLE: &[u8] = b"\
s3-website-us-east-1\0\
githubusercontent\0\
kitakyushu\0\
xn--90a3ac\0\
xn--fiqs8s\0\
amazonaws\0\
herokuapp\0\
xn--90azh\0\
xn--c1avg\0\
xn--o1ach\0\
blogspot\0\
hokkaido\0\
kawasaki\0\
xn--d1at\0\
xn--o1ac\0\
xn--p1ai\0\
yokohama\0\
appspot\0\
sapporo\0\
github\0\
nagoya\0\
police\0\
sendai\0\
!city\0\
aichi\0\
kyoto\0\
osaka\0\
tokyo\0\
!www\0\
kids\0\
kobe\0\
act\0\
asn\0\
com\0\
dni\0\
edu\0\
fed\0\
gob\0\
gov\0\
int\0\
isa\0\
k12\0\
lib\0\
ltd\0\
mil\0\
net\0\
nhs\0\
nsn\0\
nsw\0\
org\0\
plc\0\
qld\0\
sch\0\
tur\0\
vic\0\
ad\0\
ak\0\
al\0\
ar\0\
au\0\
bd\0\
ca\0\
cc\0\
ck\0\
co\0\
de\0\
er\0\
go\0\
gr\0\
id\0\
io\0\
jp\0\
kh\0\
lg\0\
me\0\
mm\0\
ne\0\
np\0\
ny\0\
or\0\
pg\0\
s3\0\
tx\0\
uk\0\
us\0\
wa\0\
*\0\
";

// 79 nodes
pub(super) static NODE_TABLE: &[TrieNode] = &[
    TrieNode::new(58, 79, 6, true), // ac
    TrieNode::new(379, 85, 9, true), // ar
    TrieNode::new(382, 23, 7, true), // au
    TrieNode::new(385, 98, 1, false), // bd
    TrieNode::new(394, 99, 2, false), // ck
    TrieNode::new(282, 30, 5, true), // com
    TrieNode::new(400, 103, 1, true), // de
    TrieNode::new(290, 0, 0, true), // edu
    TrieNode::new(403, 98, 1, false), // er
    TrieNode::new(302, 0, 0, true), // gov
    TrieNode::new(415, 104, 2, true), // io
    TrieNode::new(418, 35, 22, true), // jp
    TrieNode::new(421, 98, 1, false), // kh
    TrieNode::new(430, 98, 1, false), // mm
    TrieNode::new(330, 0, 0, true), // net
    TrieNode::new(436, 98, 1, false), // np
    TrieNode::new(346, 0, 0, true), // org
    TrieNode::new(445, 98, 1, false), // pg
    TrieNode::new(454, 57, 11, true), // uk
    TrieNode::new(457, 68, 11, true), // us
    TrieNode::new(50, 113, 5, true), // xn--90a3ac
    TrieNode::new(61, 0, 0, true), // xn--fiqs8s
    TrieNode::new(167, 0, 0, true), // xn--p1ai
    TrieNode::new(278, 0, 0, true), // asn.au
    TrieNode::new(282, 0, 0, true), // com.au
    TrieNode::new(290, 94, 2, true), // edu.au
    TrieNode::new(302, 96, 2, true), // gov.au
    TrieNode::new(412, 0, 0, true), // id.au
    TrieNode::new(330, 0, 0, true), // net.au
    TrieNode::new(346, 0, 0, true), // org.au
    TrieNode::new(72, 101, 2, true), // amazonaws.com
    TrieNode::new(185, 0, 0, true), // appspot.com
    TrieNode::new(122, 0, 0, true), // blogspot.com
    TrieNode::new(21, 0, 0, true), // githubusercontent.com
    TrieNode::new(82, 0, 0, true), // herokuapp.com
    TrieNode::new(58, 0, 0, true), // ac.jp
    TrieNode::new(370, 0, 0, true), // ad.jp
    TrieNode::new(235, 0, 0, true), // aichi.jp
    TrieNode::new(122, 0, 0, true), // blogspot.jp
    TrieNode::new(397, 0, 0, true), // co.jp
    TrieNode::new(295, 0, 0, true), // ed.jp
    TrieNode::new(406, 0, 0, true), // go.jp
    TrieNode::new(409, 0, 0, true), // gr.jp
    TrieNode::new(131, 0, 0, true), // hokkaido.jp
    TrieNode::new(140, 106, 2, false), // kawasaki.jp
    TrieNode::new(39, 106, 2, false), // kitakyushu.jp
    TrieNode::new(269, 106, 2, false), // kobe.jp
    TrieNode::new(241, 0, 0, true), // kyoto.jp
    TrieNode::new(424, 0, 0, true), // lg.jp
    TrieNode::new(208, 106, 2, false), // nagoya.jp
    TrieNode::new(433, 0, 0, true), // ne.jp
    TrieNode::new(442, 0, 0, true), // or.jp
    TrieNode::new(247, 0, 0, true), // osaka.jp
    TrieNode::new(193, 106, 2, false), // sapporo.jp
    TrieNode::new(222, 106, 2, false), // sendai.jp
    TrieNode::new(253, 0, 0, true), // tokyo.jp
    TrieNode::new(176, 106, 2, false), // yokohama.jp
    TrieNode::new(58, 0, 0, true), // ac.uk
    TrieNode::new(397, 103, 1, true), // co.uk
    TrieNode::new(302, 0, 0, true), // gov.uk
    TrieNode::new(322, 0, 0, true), // ltd.uk
    TrieNode::new(427, 0, 0, true), // me.uk
    TrieNode::new(330, 0, 0, true), // net.uk
    TrieNode::new(334, 0, 0, true), // nhs.uk
    TrieNode::new(346, 0, 0, true), // org.uk
    TrieNode::new(350, 0, 0, true), // plc.uk
    TrieNode::new(215, 0, 0, true), // police.uk
    TrieNode::new(358, 98, 1, false), // sch.uk
    TrieNode::new(373, 108, 1, true), // ak.us
    TrieNode::new(376, 0, 0, true), // al.us
    TrieNode::new(388, 109, 2, true), // ca.us
    TrieNode::new(286, 0, 0, true), // dni.us
    TrieNode::new(294, 0, 0, true), // fed.us
    TrieNode::new(310, 0, 0, true), // isa.us
    TrieNode::new(264, 0, 0, true), // kids.us
    TrieNode::new(338, 0, 0, true), // nsn.us
    TrieNode::new(439, 111, 2, true), // ny.us
    TrieNode::new(451, 0, 0, true), // tx.us
    TrieNode::new(460, 0, 0, true), // wa.us
];

// 39 leaves
pub(super) static LEAF_NODE_TABLE: &[StringOffset] = &[
    282, // com.ac
    290, // edu.ac
    302, // gov.ac
    326, // mil.ac
    330, // net.ac
    346, // org.ac
    282, // com.ar
    290, // edu.ar
    298, // gob.ar
    302, // gov.ar
    306, // int.ar
    326, // mil.ar
    330, // net.ar
    346, // org.ar
    362, // tur.ar
    274, // act.edu.au
    342, // nsw.edu.au
    354, // qld.gov.au
    366, // vic.gov.au
    463, // *.bd
    259, // !www.ck
    463, // *.ck
    448, // s3.amazonaws.com
    0, // s3-website-us-east-1.amazonaws.com
    122, // blogspot.de
    282, // com.io
    201, // github.io
    229, // !city.kawasaki.jp
    463, // *.kawasaki.jp
    314, // k12.ak.us
    314, // k12.ca.us
    318, // lib.ca.us
    391, // cc.ny.us
    314, // k12.ny.us
    92, // xn--90azh.xn--90a3ac
    102, // xn--c1avg.xn--90a3ac
    149, // xn--d1at.xn--90a3ac
    158, // xn--o1ac.xn--90a3ac
    112, // xn--o1ach.xn--90a3ac
];

pub(super) const ROOT_CHILD_COUNT: usize = 23;
pub(super) const LEAF_NODE_TABLE_BASE: usize = 79;
