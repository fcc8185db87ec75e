//! One fixed story template per genre.

use log::debug;
use rand::rngs::StdRng;

use super::nursery_rhymes::find_nursery_rhyme;
use super::poems::compose_poem;
use super::types::{Genre, StoryPrompt};

/// Produces the opening text for a prompt.
///
/// A nursery rhyme mentioned in the prompt wins for every genre. The poem genre is handed to
/// [`compose_poem`]; every other genre fills its template with the prompt as the main character
/// and the optional setting.
pub fn compose_story(prompt: &StoryPrompt, rng: &mut StdRng) -> String {
    if let Some(rhyme) = find_nursery_rhyme(&prompt.prompt) {
        debug!("Prompt matched a nursery rhyme, skipping genre template");
        return rhyme.to_string();
    }

    if prompt.genre == Genre::Poem {
        return compose_poem(&prompt.prompt, rng);
    }

    let character = prompt.prompt_or("our protagonist");
    let setting = prompt
        .setting
        .as_deref()
        .map(|s| format!(" in {}", s))
        .unwrap_or_default();

    debug!("Filling the {} template", prompt.genre);
    match prompt.genre {
        Genre::Fantasy => fantasy(character, &setting),
        Genre::SciFi => sci_fi(character, &setting),
        Genre::Mystery => mystery(character, &setting),
        Genre::Adventure => adventure(character, &setting),
        Genre::Horror => horror(character, &setting),
        Genre::Romance => romance(character, &setting),
        Genre::Historical => historical(character, &setting),
        Genre::Comedy => comedy(character, &setting),
        _ => general(character, &setting),
    }
}

fn fantasy(character: &str, setting: &str) -> String {
    format!(
        "In a realm where magic flows like water and dragons soar through the skies{setting}, {character} discovered an ancient prophecy.

The mystical scroll spoke of a chosen one who would unite the five kingdoms and restore balance to a world teetering on the edge of darkness. As the markings on their palm began to glow with arcane energy, they realized with growing wonder and dread that they were that chosen one.

With guidance from an ancient elf wizard and companionship from a grumpy dwarf warrior, they embarked on a quest to gather the Crystals of Power scattered across treacherous lands. Each crystal bestowed new magical abilities, but also drew the attention of the Shadow Emperor who sought the same power.

In the Whispering Woods, they encountered fairies who shared secrets of natural magic. Crossing the Molten Mountains, they befriended a young dragon outcast from its clan. Beneath the Endless Ocean, merfolk taught them spells of water and wind.

The final confrontation came at the Tower of Dawn, where our hero faced not only the Shadow Emperor but their own doubts and fears. In that moment of truth, they realized true power came not from the crystals but from the bonds formed along the journey.

As magic surged through the land once more, balance was restored. Though songs would be sung of their grand adventure for generations, our hero knew their greatest achievement was learning that magic exists not just in spells and enchantments, but in courage, friendship, and believing in the impossible."
    )
}

fn sci_fi(character: &str, setting: &str) -> String {
    format!(
        "In the year 2187{setting}, humanity had spread across the solar system when {character} detected an anomalous signal from beyond Neptune's orbit.

The signal defied known physics, transmitting faster than light and containing mathematical sequences impossible to decode with current technology. When strange phenomena began occurring on research stations (machinery operating without power, scientists reporting identical dreams) the government assembled a specialized team to investigate.

Aboard the advanced spacecraft \"Quantum Horizon,\" equipped with prototype technology and AI systems still in testing phases, they journeyed to the signal's source. During the three-month voyage, crew members experienced time slips and glimpses of possible futures, suggesting the signal was somehow bending spacetime itself.

What they discovered was not an alien vessel as expected, but a probe of clearly human design, yet constructed with technology centuries beyond current capabilities. The temporal dating indicated it had been launched... fifty years in the future.

Inside was a quantum data core containing urgent messages: humanity was on a catastrophic path. Climate tipping points, artificial intelligence development, and genetic engineering decisions made within the next decade would lead to a cascading collapse of civilization.

The probe represented a desperate attempt by future survivors to change their past, our present. Armed with this knowledge and detailed scientific data that could redirect humanity's course, the crew faced a monumental question: Could the future truly be rewritten, or would their attempts to change history fulfill the very destiny they sought to prevent?"
    )
}

fn mystery(character: &str, setting: &str) -> String {
    format!(
        "The small town of Ravenwood hadn't seen a murder in twenty years{setting}, until the body of prominent businessman James Harrington was discovered in his locked study. With a cryptic note clutched in his hand and no signs of forced entry, the case immediately puzzled local authorities.

{character} hadn't planned to get involved, but a personal connection to the victim made this case impossible to ignore. Against the police chief's wishes, they began their own investigation, starting with the victim's estranged daughter who had mysteriously returned to town just days before the murder.

As they dug deeper, contradictions emerged. Harrington's financial records showed large transfers to offshore accounts. His personal journal mentioned fears of being watched. And several townspeople reported seeing him argue with a stranger the night before his death, a stranger no one could identify or describe consistently.

The breakthrough came when they connected the cryptic note to a series of antique books in Harrington's collection. Each contained subtle markings indicating a decades-old secret involving the town's founding families and land deals that had made some wealthy while ruining others.

When a second body appeared with an identical note, the pattern became clear: someone was systematically exposing and eliminating those who had benefited from the town's buried secrets. As they narrowed down the suspects, they realized the killer wasn't seeking vengeance, but rather systematically removing obstacles to claiming an inheritance that would rewrite the town's power structure entirely.

The final confrontation in the abandoned clock tower revealed not just the killer's identity but a web of deception spanning generations. Justice was served, though not without raising uncomfortable questions about how far the ripples of past sins can travel through time."
    )
}

fn adventure(character: &str, setting: &str) -> String {
    format!(
        "The discovery of an ancient map hidden in a family heirloom set {character} on a journey that would test every limit{setting}.

According to local legends, the map led to the lost expedition of renowned explorer Amelia Thornton, who vanished while searching for the Temple of Seven Winds, a place rumored to hold not gold, but knowledge lost to humanity for centuries.

Assembling a team of specialists (a local guide with unparalleled tracking skills, a linguistics professor who could decipher ancient scripts, a botanist studying rare medicinal plants, and a photographer documenting the journey) they ventured into unexplored territory where modern maps showed only blank spaces.

Their expedition faced natural obstacles that seemed almost deliberately placed: river crossings that required ingenious solutions, mountain passes that tested physical endurance, and dense jungles harboring both helpful and harmful species. Each team member's unique skills proved crucial at different points, forging bonds through shared challenges.

Evidence of Thornton's expedition appeared sporadically in camp remnants, journal fragments and trail markers, confirming they were on the right path but also raising questions about what had ultimately stopped her. The discovery of her final camp, intact but abandoned, suggested she had found something that changed her plans entirely.

When they finally reached the hidden valley containing the Temple, they understood why Thornton never returned: she had found a civilization, isolated but thriving, preserving knowledge and practices from ancient times. She had chosen to stay, becoming their chronicler rather than revealing their existence to a world that might exploit them.

The team now faced the same choice: return with their discovery or protect this last repository of wisdom that could either heal or harm the modern world depending on how it was used."
    )
}

fn horror(character: &str, setting: &str) -> String {
    format!(
        "It began with barely noticeable changes{setting}: electronics malfunctioning, pets refusing to enter certain rooms, unexplained cold spots. {character} initially dismissed these as coincidences until the dreams started.

Each night brought the same vision: a forgotten door, a descending staircase, eager whispers growing louder with each step. Each morning, they would wake disoriented, finding objects moved from where they had been left the night before.

Research into the property's history revealed disturbing patterns. Previous residents reported similar experiences before abruptly leaving. Local records showed unusual gaps, as if information had been deliberately removed. An elderly neighbor finally shared what others wouldn't: decades ago, an occultist had conducted experiments there, attempting to open doorways to places humans weren't meant to access.

The disturbances intensified. Shadows moved independently of their sources. Voices emerged from unplugged devices. Visitors reported feeling watched, leaving quickly with vague excuses. Sleep became nearly impossible as scratching sounds emerged from inside the walls, growing more insistent, more deliberate.

The breaking point came when they discovered a hidden space behind the basement shelving: a room absent from all building plans, containing symbols etched into the floor and walls covered with writing in an unrecognizable language that somehow felt readable in peripheral vision.

As they stood in that impossible space, understanding dawned with horrifying clarity: the house hadn't been haunted. It had been waiting. The occultist hadn't failed in opening a doorway. He had succeeded, creating a threshold through which something patient had been gradually emerging, using disturbed sleep and subtle manipulations to prepare its chosen vessel.

And they had just completed the final step by finding this room. The whispers suddenly stopped, replaced by a deep silence that felt like held breath before a plunge into endless depths."
    )
}

fn romance(character: &str, setting: &str) -> String {
    format!(
        "After a career-shattering setback, {character} returned to their hometown{setting}, planning to regroup briefly before trying again in the city. The last person they expected (or wanted) to encounter was their former high school debate rival, now running the local bookstore and apparently thriving.

Their first meeting was predictably awkward, reopening old competitive wounds and highlighting how their paths had diverged. Yet circumstances kept bringing them together: a community project needing both their skills, mutual friends insisting they'd \"get along if they just tried,\" and storm damage forcing temporary shelter in the same space.

Reluctant cooperation gradually revealed how each had misunderstood the other for years. Late-night conversations over coffee uncovered shared dreams beneath different approaches. What had once seemed like fundamental differences in values emerged as complementary perspectives on the same goals.

Just as understanding blossomed into deeper feelings, complications arose. A job offer from the city promised career redemption but would mean leaving. Family obligations created conflicting priorities. And neither wanted to admit how much their feelings had changed, each assuming the other still saw them through the lens of old rivalries.

The breaking point came during the town's annual festival when a moment of public vulnerability finally shattered pretenses. In that honest space, they realized that sometimes the path forward isn't found in grand cities or carefully constructed plans, but in the courage to see familiar places and people with new eyes.

Together, they discovered that success could be redefined, combining their strengths to build something neither could create alone. What began as a temporary detour had become an unexpected destination, proving that sometimes the heart recognizes home before the mind can catch up."
    )
}

fn historical(character: &str, setting: &str) -> String {
    format!(
        "The year was 1846{setting}, a time of great change as industrial innovations collided with centuries-old traditions. Born to a merchant family of modest means, {character} navigated this shifting world by developing skills in both traditional craftsmanship and emerging technologies.

When political unrest disrupted established trade routes, their family business faced ruin. Converting their workshop to produce newly-designed mechanical components offered a path forward, though it meant risking what little capital remained and facing resistance from guild members who viewed such innovation as threatening their livelihoods.

Complicating matters was their growing friendship with Helena Blackwood, daughter of a conservative aristocrat who considered manufacturing beneath his family's dignity yet whose estate was hemorrhaging wealth as agricultural traditions became increasingly unsustainable.

Against the backdrop of social upheaval, their unlikely alliance introduced new methods that preserved traditional craftsmanship while incorporating mechanical advantages. Their collaborative approach, combining her education and connections with their practical knowledge and willingness to adapt, created a model that others soon sought to emulate.

As tensions between workers and factory owners erupted into violence across the region, their workshop stood as an alternative approach where dignity of labor and innovation coexisted. Though their names wouldn't appear in broader historical accounts of the era, their influence spread through the lives they touched and methods they pioneered.

Through personal journals and correspondence preserved by descendants, we glimpse how ordinary individuals navigated extraordinary times, making daily choices that collectively shaped the course of history as profoundly as the actions of generals and statesmen."
    )
}

fn comedy(character: &str, setting: &str) -> String {
    format!(
        "It was supposed to be a simple house-sitting job{setting}: water the plants, collect the mail, and make sure the luxury home of {character}'s second cousin's former boss remained standing. A straightforward week in an upscale neighborhood with excellent wifi and a hot tub. What could possibly go wrong?

Everything, as it turned out. Within hours of arriving, they accidentally set off the elaborate security system, resulting in a visit from local police who were dubious about their explanation and presence. Upon finally regaining access, they discovered the exotic houseplant collection required specific care routines described in a binder apparently written by someone with a PhD in botany and too much time on their hands.

The real complications began when neighbors started arriving with bizarre requests, each under the impression that the homeowner had promised them various favors: pet-sitting a ferret with apparent anxiety issues, hosting a book club discussion on a novel no one seemed to have actually read, and providing rehearsal space for an experimental jazz-folk fusion band.

Unable to reach the homeowner and too non-confrontational to refuse, they found themselves juggling increasingly chaotic obligations while maintaining the façade of competence. The situation escalated further when the homeowner's estranged sibling arrived, assuming the house was empty and planning to \"borrow\" some contested family heirlooms.

Just when all schemes were about to collapse spectacularly during an impromptu neighborhood gathering, a power outage plunged everything into darkness, leading to mistaken identities, misplaced ferrets, and confessions meant for other ears. By morning, unlikely friendships had formed, romantic possibilities had emerged, and the returned homeowner found their typically isolated existence transformed into a community hub.

As for our protagonist, they left with job offers, dinner invitations, and the ferret, which had apparently developed an attachment. Some house-sitting jobs come with unexpected benefits."
    )
}

fn general(character: &str, setting: &str) -> String {
    format!(
        "Once upon a time{setting}, {character} embarked on an extraordinary journey that would change their life forever.

What began as an ordinary day took an unexpected turn when a mysterious messenger delivered an ancient map, supposedly leading to a treasure beyond imagination. Though skeptical, curiosity prevailed, and the adventure began.

The path was filled with challenges that tested both courage and wit. Dense forests concealed hidden dangers, mountain passes required clever navigation, and riddles guarded key information about the treasure's location.

Along the way, unexpected allies joined the quest, each bringing unique skills and perspectives that proved invaluable. Together, they overcame obstacles that would have been impossible to face alone, forming bonds of friendship that transcended their differences.

When they finally reached their destination, they discovered the true treasure wasn't gold or jewels, but knowledge that had been protected for generations, waiting for those worthy to discover it. This wisdom gave them a new purpose and understanding of the world.

Returning home, they found they had changed as much as the landscapes they had traversed. The adventure had revealed strengths they hadn't known they possessed and perspectives they'd never considered.

And though many doubted their tales, the glimmer in their eyes when they spoke of their journey hinted at truths beyond ordinary experience, reminding us all that sometimes the greatest adventures are those that transform us from within."
    )
}
